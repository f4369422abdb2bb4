use std::{process::exit, thread::sleep, time::Duration};

use crate::config::Config;
use crate::snake::Direction::*;
use crate::term::TermManager;
use crate::world::World;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::ThreadRng;

const POLL_INTERVAL_MS: u64 = 5;

pub struct SnakeGame {
    config: Config,
    paused: bool,
    term: TermManager,
    rng: ThreadRng,
}

impl SnakeGame {
    pub fn new(config: Config) -> Self {
        SnakeGame { config, paused: false, term: TermManager::new(), rng: rand::thread_rng() }
    }

    pub fn initialize(&mut self) {
        let (w, h) = self.term.get_terminal_size();
        let need_w = self.config.grid_width as u16 + 2;
        let need_h = self.config.grid_height as u16 + 2;

        if w < need_w || h < need_h {
            eprintln!("Terminal too small: the playfield needs {}x{} characters.", need_w, need_h);
            exit(1);
        }

        self.term.setup();
    }

    pub fn show_intro(&mut self) {
        let lines = &[
            "Arrow keys or WASD to move",
            "Esc to pause",
            "CTRL+C to quit",
            "",
            "Press any key to begin"
        ];

        self.term.show_message(lines);

        if is_ctrl_c(&self.term.read_key_blocking()) {
            self.clean_exit()
        }

        self.term.hide_message();
    }

    pub fn play(&mut self) {
        self.term.clear();
        self.term.draw_borders(&self.config);
        self.term.hide_message();

        let mut world = World::new(self.config, &mut self.rng);

        // Poll input every few ms for responsiveness, step the simulation
        // once per tick_rate-th of a second.
        let polls_per_step = (1000 / self.config.tick_rate / POLL_INTERVAL_MS).max(1);
        let mut polls_until_step = polls_per_step;

        self.term.draw_world(&world);

        loop {
            sleep(Duration::from_millis(POLL_INTERVAL_MS));

            for key_ev in self.term.read_key_events_queue() {
                match &key_ev {
                    ev if is_ctrl_c(ev) => self.clean_exit(),
                    KeyEvent { code, modifiers: _ } => match code {
                        KeyCode::Char('w') | KeyCode::Up => world.queue_direction(Up),
                        KeyCode::Char('a') | KeyCode::Left => world.queue_direction(Left),
                        KeyCode::Char('s') | KeyCode::Down => world.queue_direction(Down),
                        KeyCode::Char('d') | KeyCode::Right => world.queue_direction(Right),
                        KeyCode::Esc => self.toggle_pause(),
                        _ => {}
                    }
                }
            }

            if self.paused { continue; }

            polls_until_step -= 1;
            if polls_until_step == 0 {
                polls_until_step = polls_per_step;

                let outcome = world.tick(&mut self.rng);

                if outcome.reset {
                    // The whole body disappeared; start the frame over.
                    self.term.clear();
                    self.term.draw_borders(&self.config);
                    self.term.draw_world(&world);
                } else {
                    self.term.draw_step(&world, &outcome);
                }
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn clean_exit(&mut self) {
        self.term.restore();
        exit(0);
    }

    fn toggle_pause(&mut self) {
        if !self.paused {
            self.term.show_message(&["Paused", "Press Esc to resume", "or Ctrl+C to quit"]);
        } else {
            self.term.hide_message();
        }

        self.paused = !self.paused;
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
