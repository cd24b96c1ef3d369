use clap::{Parser, Subcommand};
use dataset::valid_similarity_runs;
use std::time::Duration;
use traversal_core::{build_request, ConceptRow, TraversalOperator};
use traversal_gui::{run_gui, GuiConfig, PanelHost};

mod demo;

#[derive(Parser)]
#[command(name = "traversal", version, about = "Concept traversal panel")]
struct Cli {
    /// Dataset definition file; the built-in demo dataset is used when the
    /// file cannot be loaded
    #[arg(long, default_value = "demo_dataset.json")]
    dataset: String,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one traversal without the GUI and print the ranked matches
    Traverse {
        /// Starting sample id
        #[arg(long)]
        sample: String,
        /// Concept as "text=weight"; repeatable
        #[arg(long = "concept")]
        concepts: Vec<String>,
        #[arg(long, default_value_t = 50.0)]
        scale: f64,
        /// Similarity run key; defaults to the first qualifying run
        #[arg(long)]
        index: Option<String>,
    },
    /// List the similarity runs usable for traversal
    Indexes,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let dataset = demo::load_or_default(&cli.dataset);

    match cli.command {
        None => {
            let host = PanelHost {
                traverser: Box::new(demo::DemoTraverser::new(dataset.clone())),
                media: Box::new(demo::DemoMedia::new(dataset.clone())),
                dataset,
            };
            run_gui(GuiConfig::default(), host)?;
        }
        Some(Commands::Indexes) => {
            for key in valid_similarity_runs(&dataset) {
                println!("{key}");
            }
        }
        Some(Commands::Traverse {
            sample,
            concepts,
            scale,
            index,
        }) => {
            let index = match index.or_else(|| valid_similarity_runs(&dataset).first().cloned()) {
                Some(key) => key,
                None => {
                    eprintln!("dataset has no prompt-capable similarity run");
                    std::process::exit(1);
                }
            };
            let rows = parse_concepts(&concepts)?;
            let request = build_request(Some(&sample), &rows, scale, &index)?;
            let op = demo::DemoTraverser::new(dataset);
            let mut handle = op.execute(&request);
            while !handle.poll() {
                std::thread::sleep(Duration::from_millis(10));
            }
            if let Some(err) = handle.error() {
                eprintln!("traversal failed: {err}");
                std::process::exit(1);
            }
            let result = handle.result().ok_or("traversal returned no result")?;
            println!("{}", serde_json::to_string_pretty(result)?);
        }
    }
    Ok(())
}

fn parse_concepts(args: &[String]) -> Result<Vec<ConceptRow>, String> {
    let mut rows = Vec::new();
    for arg in args {
        let (text, weight) = arg
            .split_once('=')
            .ok_or_else(|| format!("invalid concept '{arg}', expected text=weight"))?;
        let weight: f64 = weight
            .parse()
            .map_err(|_| format!("invalid weight in '{arg}'"))?;
        rows.push(ConceptRow::new(text, weight));
    }
    Ok(rows)
}
