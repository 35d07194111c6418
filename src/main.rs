#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use tsvgrid::cli::CliArgs;
use tsvgrid::model::AppModel;
use tsvgrid::table::{parse_tsv, Table};

mod runtime;
mod view;

use runtime::App;

fn main() -> Result<()> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    let args = CliArgs::parse();
    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    tsvgrid::tracing::init();

    let data = match parse_tsv(std::io::stdin().lock()) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        rows = data.rows.len(),
        columns = data.col_count,
        "Loaded table from stdin"
    );

    let (width, height) = config.window_size;
    let model = AppModel::new(Table::new(data), config.theme.clone(), width, height);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(model, config);
    event_loop.run_app(&mut app)?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
