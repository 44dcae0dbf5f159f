//! Save the submission index to a parquet file.

use std::{fs::File, path::PathBuf, sync::Arc};

use anyhow::Result;
use arrow::{
    array::{StringBuilder, UInt16Builder},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use parquet::{arrow::ArrowWriter, file::properties::WriterProperties};

use crate::{cli::create_progress_bar, submission::SubmissionFile};

pub fn save_inventory(files: &[SubmissionFile], file_path: &PathBuf) -> Result<()> {
    let chunk_size = 100000;

    let file = File::create(file_path)?;

    let schema = Arc::new(Schema::new(vec![
        Field::new("party", DataType::Utf8, false),
        Field::new("submission_year", DataType::UInt16, false),
        Field::new("data_year", DataType::UInt16, false),
        Field::new("date", DataType::Utf8, false),
        Field::new("extra", DataType::Utf8, false),
        Field::new("version", DataType::Utf8, true),
        Field::new("path", DataType::Utf8, false),
    ]));

    let props = WriterProperties::builder()
        .set_compression(parquet::basic::Compression::ZSTD(
            parquet::basic::ZstdLevel::default(),
        ))
        .set_dictionary_enabled(true)
        .build();

    let mut writer = ArrowWriter::try_new(file, schema.clone(), Some(props))?;
    let pb = create_progress_bar(files.len() as u64, "Writing parquet file".to_string());

    let mut party_builder = StringBuilder::with_capacity(chunk_size, chunk_size * 3);
    let mut submission_year_builder = UInt16Builder::with_capacity(chunk_size);
    let mut data_year_builder = UInt16Builder::with_capacity(chunk_size);
    let mut date_builder = StringBuilder::with_capacity(chunk_size, chunk_size * 8);
    let mut extra_builder = StringBuilder::with_capacity(chunk_size, chunk_size * 8);
    let mut version_builder = StringBuilder::with_capacity(chunk_size, chunk_size * 4);
    let mut path_builder = StringBuilder::with_capacity(chunk_size, chunk_size * 32);

    let mut current_batch_rows = 0;

    for file in files {
        party_builder.append_value(&file.info.party);
        submission_year_builder.append_value(file.info.submission_year);
        data_year_builder.append_value(file.info.data_year);
        date_builder.append_value(&file.info.date);
        extra_builder.append_value(&file.info.extra);
        version_builder.append_option(file.info.version.as_deref());
        path_builder.append_value(file.path.to_string_lossy());

        current_batch_rows += 1;
        pb.inc(1);

        if current_batch_rows >= chunk_size {
            write_batch(
                &mut writer,
                &schema,
                &mut party_builder,
                &mut submission_year_builder,
                &mut data_year_builder,
                &mut date_builder,
                &mut extra_builder,
                &mut version_builder,
                &mut path_builder,
            )?;
            current_batch_rows = 0;
        }
    }

    if current_batch_rows > 0 {
        write_batch(
            &mut writer,
            &schema,
            &mut party_builder,
            &mut submission_year_builder,
            &mut data_year_builder,
            &mut date_builder,
            &mut extra_builder,
            &mut version_builder,
            &mut path_builder,
        )?;
    }

    pb.finish_with_message("Finished writing parquet file");
    writer.close()?;

    Ok(())
}

fn write_batch(
    writer: &mut ArrowWriter<File>,
    schema: &Arc<Schema>,
    party_builder: &mut StringBuilder,
    submission_year_builder: &mut UInt16Builder,
    data_year_builder: &mut UInt16Builder,
    date_builder: &mut StringBuilder,
    extra_builder: &mut StringBuilder,
    version_builder: &mut StringBuilder,
    path_builder: &mut StringBuilder,
) -> Result<()> {
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(party_builder.finish()),
            Arc::new(submission_year_builder.finish()),
            Arc::new(data_year_builder.finish()),
            Arc::new(date_builder.finish()),
            Arc::new(extra_builder.finish()),
            Arc::new(version_builder.finish()),
            Arc::new(path_builder.finish()),
        ],
    )?;

    writer.write(&batch)?;

    Ok(())
}

// -- Tests -------------------------------------------------------------------
