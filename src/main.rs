mod config;
mod food;
mod game;
mod snake;
mod term;
mod world;

pub type TermInt = u16;
pub type Coords = (u16, u16);

pub type GridInt = i16;
pub type Cell = (GridInt, GridInt);

fn main() {
    let mut game = game::SnakeGame::new(config::Config::default());
    game.initialize();
    game.show_intro();

    // Runs forever: self-collision resets the snake in place, and the
    // loop takes care of exiting cleanly on CTRL+C.
    game.play();
}
