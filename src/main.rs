#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result, bail};
use life_board::{Life, RunConfig};
use log::{LevelFilter, info};
use simple_logger::SimpleLogger;

const USAGE: &str = "usage: life-board [--pattern NAME] [--random SIZE DENSITY SEED] \
                     [--generations N] [--report-every N] [--print]";

fn parse_args() -> Result<RunConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = RunConfig::default();
    let next_arg = |i: usize, flag: &str| -> Result<&str> {
        args.get(i)
            .map(String::as_str)
            .with_context(|| format!("{flag} requires a value\n{USAGE}"))
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--pattern" => {
                i += 1;
                config = config.pattern(next_arg(i, "--pattern")?);
            }
            "--random" => {
                let size: usize = next_arg(i + 1, "--random")?
                    .parse()
                    .context("--random SIZE must be a positive integer")?;
                let density: f64 = next_arg(i + 2, "--random")?
                    .parse()
                    .context("--random DENSITY must be a number in [0, 1]")?;
                let seed: u64 = next_arg(i + 3, "--random")?
                    .parse()
                    .context("--random SEED must be an unsigned integer")?;
                config = config.random(size, density, seed);
                i += 3;
            }
            "--generations" => {
                i += 1;
                let n: u64 = next_arg(i, "--generations")?
                    .parse()
                    .context("--generations requires a non-negative integer")?;
                config = config.generations(n);
            }
            "--report-every" => {
                i += 1;
                let n: u64 = next_arg(i, "--report-every")?
                    .parse()
                    .context("--report-every requires a non-negative integer")?;
                config = config.report_every(n);
            }
            "--print" => {
                config = config.print_board(true);
            }
            other => bail!("unknown argument: {other}\n{USAGE}"),
        }
        i += 1;
    }
    Ok(config)
}

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
        .context("failed to install logger")?;

    let config = parse_args()?;
    let board = config
        .initial_board()
        .context("failed to build the initial board")?;
    let generations = config.resolved_generations();
    info!(
        "seed {:?}: {}x{} board, population {}, running {} generations",
        config.seed,
        board.width(),
        board.height(),
        board.population(),
        generations
    );

    let mut life = Life::new(board);
    for _ in 0..generations {
        let changes = life.step_with(|_, _| {});
        if config.report_every > 0 && life.generation() % config.report_every == 0 {
            let bounds = life
                .bounds()
                .map(|r| format!("{} .. {}", r.top_left(), r.bottom_right()))
                .unwrap_or_else(|| "empty".to_string());
            info!(
                "generation {:>6}  changes {:>6}  population {:>6}  bounds {}",
                life.generation(),
                changes,
                life.population(),
                bounds
            );
        }
        if life.is_empty() {
            info!("extinct at generation {}", life.generation());
            break;
        }
    }

    if config.print_board {
        print!("{}", life.board());
    }
    Ok(())
}
