use clap::Parser;
use env_logger::Env;
use log::info;

use startrek::cli::Args;
use startrek::io::TerminalIO;
use startrek::services::game::Game;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("starting with seed {} and sound {:?}", seed, args.sound);

    println!("*** STAR TREK ***");
    println!();

    let mut game = Game::new(
        seed,
        Box::new(TerminalIO),
        Box::new(TerminalIO),
        args.sound.sink(),
    );
    match game.run() {
        Ok(_) => println!("THANK YOU FOR PLAYING STAR TREK!"),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}
