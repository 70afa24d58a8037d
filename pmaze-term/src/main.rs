use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use pmaze::{
    algorithms::{seeded_rng, LifeLike},
    Dims,
};
use pmaze_term::{
    logging,
    renderer::{render_board, TextRenderer},
    settings::Settings,
    AppError,
};

fn parse_dims(s: &str) -> Result<Dims, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("invalid x '{}': {}", x, e))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("invalid y '{}': {}", y, e))?;
    Ok(Dims(x, y))
}

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "pmaze")]
struct Args {
    #[clap(short, long, action = ArgAction::Count, global = true, help = "More logging, repeat for even more")]
    verbose: u8,
    #[clap(short, long, global = true, help = "Use this settings file instead of the default one")]
    config: Option<PathBuf>,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, help = "Print the loaded config and quit")]
    debug_config: bool,
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a perfect maze and print it
    Generate(GenerateArgs),
    /// Grow a maze-like pattern with the B3/S12345 cellular automaton and print it
    Life(LifeArgs),
}

#[derive(ClapArgs, Debug, Default)]
struct GenerateArgs {
    #[clap(long, help = "Number of columns")]
    width: Option<i32>,
    #[clap(long, help = "Number of rows")]
    height: Option<i32>,
    #[clap(long, value_parser = parse_dims, help = "Cell the carving starts from, X,Y")]
    entry: Option<Dims>,
    #[clap(long, value_parser = parse_dims, help = "Cell whose generation path is recorded, X,Y")]
    exit: Option<Dims>,
    #[clap(long)]
    seed: Option<u64>,
    #[clap(short, long, action, help = "Draw the path recorded during generation")]
    solution: bool,
    #[clap(long, value_parser = parse_dims, help = "Solve from this cell, X,Y (defaults to the entry)")]
    from: Option<Dims>,
    #[clap(long, value_parser = parse_dims, help = "Solve to this cell, X,Y (defaults to the exit)")]
    to: Option<Dims>,
    #[clap(long, action, help = "Don't color the output")]
    no_color: bool,
}

#[derive(ClapArgs, Debug)]
struct LifeArgs {
    #[clap(long)]
    width: Option<i32>,
    #[clap(long)]
    height: Option<i32>,
    #[clap(long)]
    iterations: Option<usize>,
    #[clap(long)]
    seed: Option<u64>,
}

fn generate(settings: &Settings, args: GenerateArgs) -> Result<(), AppError> {
    let mut spec = settings.get_maze();
    spec.size = Dims(
        args.width.unwrap_or(spec.size.0),
        args.height.unwrap_or(spec.size.1),
    );
    if let Some(entry) = args.entry {
        spec.entry = entry;
    }
    if args.exit.is_some() {
        spec.exit = args.exit;
    }
    if args.seed.is_some() {
        spec.seed = args.seed;
    }

    let mut maze = spec.build()?;

    let path = if args.from.is_some() || args.to.is_some() {
        let from = args.from.unwrap_or(maze.entry());
        let to = args.to.unwrap_or(maze.exit());
        Some(maze.solve(from, to)?)
    } else if args.solution {
        maze.solution().map(<[Dims]>::to_vec)
    } else {
        None
    };

    let mut render = settings.get_render();
    if args.no_color {
        render = render.set_color(false);
    }

    print!("{}", TextRenderer::new(&maze, path.as_deref(), &render).render());
    if let Some(seed) = maze.seed() {
        println!("Seed: {}", seed);
    }

    Ok(())
}

fn life(settings: &Settings, args: LifeArgs) {
    let defaults = settings.get_life();
    let size = Dims(
        args.width.unwrap_or(defaults.get_size().0),
        args.height.unwrap_or(defaults.get_size().1),
    );
    let iterations = args.iterations.unwrap_or(defaults.get_iterations());

    let (seed, mut rng) = seeded_rng(args.seed);
    log::info!("growing {}x{} board for {} iterations, seed {}", size.0, size.1, iterations, seed);

    let board = LifeLike::seed_patch(size, defaults.get_patch(), defaults.get_density(), &mut rng);
    let board = LifeLike::default().run(board, iterations);

    print!("{}", render_board(&board));
    println!("Seed: {}", seed);
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    logging::init(args.verbose)?;

    let settings_path = args.config.clone().unwrap_or_else(Settings::default_path);

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    let settings = Settings::load(&settings_path)?;

    if args.debug_config {
        println!("{}", settings.to_ron()?);
        return Ok(());
    }

    better_panic::install();

    match args.command {
        Some(Command::Generate(generate_args)) => generate(&settings, generate_args)?,
        Some(Command::Life(life_args)) => life(&settings, life_args),
        None => generate(&settings, GenerateArgs::default())?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positions() {
        assert_eq!(parse_dims("3,4"), Ok(Dims(3, 4)));
        assert_eq!(parse_dims(" -1 , 7"), Ok(Dims(-1, 7)));
        assert!(parse_dims("3").is_err());
        assert!(parse_dims("a,4").is_err());
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory as _;
        Args::command().debug_assert();
    }

    #[test]
    fn generate_flags() {
        let args = Args::try_parse_from([
            "pmaze", "-vv", "generate", "--width", "4", "--from", "0,0", "--to", "3,2",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        match args.command {
            Some(Command::Generate(g)) => {
                assert_eq!(g.width, Some(4));
                assert_eq!(g.from, Some(Dims(0, 0)));
                assert_eq!(g.to, Some(Dims(3, 2)));
                assert!(!g.solution);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
