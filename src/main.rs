use anyhow::Result;
use splitbox::config::Config;
use splitbox::io::{clipboard, export};
use splitbox::pipeline::Pipeline;
use splitbox::worker::ExecutionHost;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_cli();

    let mut pipeline = Pipeline::new();
    pipeline.read_input(config.input_path().map(|p| p.as_path()))?;

    let host = ExecutionHost::spawn()?;
    pipeline.split(&host, &config).await?;
    host.shutdown();

    // Validate the index before any output is produced.
    if let Some(idx) = config.batch {
        pipeline.group(idx)?;
    }

    if let Some(target) = &config.export {
        let path = export::archive_path(target);
        export::export_archive(&path, pipeline.groups(), config.template, config.join)?;
        eprintln!("exported {}", path.display());
    }

    let batch_count = pipeline.groups().len();
    let selected = config.batch.unwrap_or(0);

    if config.stdout {
        let rendered = match config.batch {
            Some(idx) => vec![pipeline.render(idx, config.template, config.join)?],
            None => (0..batch_count)
                .map(|i| pipeline.render(i, config.template, config.join))
                .collect::<Result<Vec<_>>>()?,
        };
        for (i, text) in rendered.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{text}");
        }
    }

    if batch_count > 0 {
        let text = pipeline.render(selected, config.template, config.join)?;
        if let Some(path) = &config.write {
            export::write_batch_file(path, &text)?;
        }
        if !config.no_clipboard && clipboard::copy_to_clipboard(&text, false)? {
            tracing::info!("copied batch {selected} to clipboard");
        }
    } else if config.write.is_some() {
        tracing::warn!("no batches produced; nothing written");
    }

    eprintln!("{}", pipeline.summary());
    Ok(())
}
