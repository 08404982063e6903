use anyhow::{Context, Result};
use csv_async::{AsyncReader, StringRecord};
use futures::stream::StreamExt;
use rand::Rng;
use tokio::{
    fs::File,
    io::{AsyncWriteExt, BufWriter},
    sync::mpsc::channel,
};

use crate::models::Person;

const FIRST_NAMES: [&str; 10] = [
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Margaret", "John", "Radia", "Ken",
];
const LAST_NAMES: [&str; 10] = [
    "Lovelace",
    "Hopper",
    "Turing",
    "Dijkstra",
    "Liskov",
    "Knuth",
    "Hamilton",
    "McCarthy",
    "Perlman",
    "Thompson",
];

pub async fn create_csv(path: &str, number_rows: u32) -> Result<()> {
    tracing::info!("Creating csv file");

    let start = std::time::Instant::now();

    let file = File::create(path)
        .await
        .with_context(|| format!("Could not create {path}"))?;
    let mut writer = BufWriter::new(file);

    // Write the header
    writer.write_all(b"first_name,last_name,age\n").await?;

    // We'll not write every single line, but write in chunks to limit the overhead
    const CHUNK_SIZE: usize = 1000;
    let mut buffer = String::with_capacity(CHUNK_SIZE * 50);

    let mut rng = rand::rng();
    for i in 0..number_rows {
        let first_name = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
        let last_name = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
        let age = rng.random_range(18..=90);

        buffer.push_str(&format!("{},{},{}\n", first_name, last_name, age));

        // Write the chunk if the chunk size is reached
        if i % CHUNK_SIZE as u32 == 0 {
            writer.write_all(buffer.as_bytes()).await?;
            buffer.clear();
        }
    }

    // Write any remaining data in the buffer.
    if !buffer.is_empty() {
        writer.write_all(buffer.as_bytes()).await?;
    }

    writer.flush().await?;

    tracing::info!("CSV file created in {:?}", start.elapsed());

    Ok(())
}

pub async fn build_roster(input: &str, output: &str) -> Result<()> {
    tracing::info!("Building the roster");

    // Open both ends up front so a bad path fails here instead of inside a task
    let input_file = File::open(input)
        .await
        .with_context(|| format!("Could not open {input}"))?;
    let output_file = File::create(output)
        .await
        .with_context(|| format!("Could not create {output}"))?;

    // Create channels
    let (to_workers, mut from_reader) = channel::<StringRecord>(100);
    let (to_writer, mut from_worker) = channel(100);

    let reader_handle = tokio::spawn(async move {
        // Concurrently push all csv records to the processing worker
        let mut reader = AsyncReader::from_reader(input_file);
        let num_workers = num_cpus::get();
        reader
            .records()
            .for_each_concurrent(num_workers, |record| {
                let to_workers = to_workers.clone();
                async move {
                    let record = record.unwrap();
                    to_workers.send(record).await.unwrap();
                }
            })
            .await;

        tracing::info!("CSV file reading completed, all lines pushed to processing worker");
    });

    let processor_handle = tokio::spawn(async move {
        // Batch configuration
        const BATCH_SIZE: usize = 1_000;
        let mut batch = Vec::with_capacity(BATCH_SIZE);

        // Build person records and send them on in batches
        while let Some(record) = from_reader.recv().await {
            let first_name = &record[0];
            let last_name = &record[1];
            let age = record[2].parse().unwrap_or(0);

            // Fields go in untouched, whatever the file holds
            let person = Person::new(first_name, last_name, age);
            batch.push(person);

            if batch.len() == BATCH_SIZE {
                to_writer.send(batch).await.unwrap();
                batch = Vec::with_capacity(BATCH_SIZE);
            }
        }

        // Send any remaining records
        if !batch.is_empty() {
            to_writer.send(batch).await.unwrap();
        }

        tracing::info!("Processing completed, all records pushed to the roster writer");
    });

    let writer_handle = tokio::spawn(async move {
        let start = std::time::Instant::now();

        let mut writer = BufWriter::new(output_file);

        while let Some(people) = from_worker.recv().await {
            let batch_length = people.len();

            let mut lines = String::with_capacity(batch_length * 32);
            for person in &people {
                lines.push_str(&format!("{} ({})\n", person.full_name(), person.age));
            }

            if let Err(e) = writer.write_all(lines.as_bytes()).await {
                tracing::error!(
                    "Failed to write batch of {} roster lines: {:?}",
                    batch_length,
                    e
                );

                // Skip to next batch
                continue;
            }

            tracing::info!("Batch of {} people added to the roster", batch_length);
        }

        if let Err(e) = writer.flush().await {
            tracing::error!("Failed to flush the roster file: {:?}", e);
            return;
        }

        tracing::info!("Roster completed in {:?}", start.elapsed());
    });

    let _ = tokio::join!(reader_handle, processor_handle, writer_handle);

    Ok(())
}
