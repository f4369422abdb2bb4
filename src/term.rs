use crate::config::Config;
use crate::world::{TickOutcome, World};
use crate::{Cell, Coords, TermInt};
use std::{io::{stdout, Stdout, Write}, time::Duration};

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};

const SNAKE_COLOR: Color = Color::Green;
const FOOD_COLOR: Color = Color::Red;
const BORDER_COLOR: Color = Color::Grey;

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHAR: char = 'O';

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    screen: Vec<(char, Color)>,
    current_msg: Option<Message>,
}

struct Message {
    top_left: Coords,
    width: TermInt,
    height: TermInt,
}

impl TermManager {
    pub fn new() -> Self {
        let (width, height) = terminal::size().expect("Error reading size.");
        let stdout = stdout();
        let screen = vec![(' ', Color::Reset); width as usize * height as usize];
        TermManager { width, height, stdout, screen, current_msg: None }
    }

    pub fn setup(&mut self) {
        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        self.set_raw_mode(true);
        self.set_cursor_visibility(false);
    }

    pub fn restore(&mut self) {
        self.set_raw_mode(false);
        self.set_cursor_visibility(true);
        execute!(self.stdout, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    pub fn read_key_blocking(&self) -> KeyEvent {
        loop {
            if let Event::Key(ev) = read().unwrap() {
                return ev;
            }
        }
    }

    pub fn read_key_events_queue(&self) -> Vec<KeyEvent> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).unwrap() {
            if let Event::Key(ev) = read().unwrap() {
                events.push(ev);
            }
        }

        events
    }

    pub fn get_terminal_size(&self) -> Coords {
        (self.width, self.height)
    }

    /// Frame around the playfield; the grid itself sits one character in
    /// on each side.
    pub fn draw_borders(&mut self, config: &Config) {
        let width = config.grid_width as TermInt + 2;
        let height = config.grid_height as TermInt + 2;

        let end_x = width - 1;
        let end_y = height - 1;

        for x in 0..width {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            self.print_at((x, 0), ch, BORDER_COLOR);
            self.print_at((x, end_y), ch, BORDER_COLOR);
        }

        for y in 1..end_y {
            self.print_at((0, y), '|', BORDER_COLOR);
            self.print_at((end_x, y), '|', BORDER_COLOR);
        }

        self.flush();
    }

    /// Full redraw of both entities, used at start of play and after a
    /// snake reset.
    pub fn draw_world(&mut self, world: &World) {
        self.print_cell(world.food().position(), FOOD_CHAR, FOOD_COLOR);

        let snake = world.snake();
        for (i, &pos) in snake.segments().iter().enumerate() {
            let ch = if i == 0 {snake.head_char()} else {SNAKE_BODY_CHAR};
            self.print_cell(pos, ch, SNAKE_COLOR);
        }

        self.flush();
    }

    /// Incremental update after a normal tick: new head, old head becomes
    /// body, vacated tail is erased, relocated food is drawn.
    pub fn draw_step(&mut self, world: &World, outcome: &TickOutcome) {
        let snake = world.snake();

        self.print_cell(snake.head(), snake.head_char(), SNAKE_COLOR);

        if let Some(&neck) = snake.segments().get(1) {
            self.print_cell(neck, SNAKE_BODY_CHAR, SNAKE_COLOR);
        }

        if let Some(tail) = outcome.removed_tail {
            self.print_cell(tail, ' ', Color::Reset);
        }

        if outcome.ate {
            self.print_cell(world.food().position(), FOOD_CHAR, FOOD_COLOR);
        }

        self.flush();
    }

    pub fn show_message(&mut self, lines: &[&str]) {
        if self.has_message() {
            self.hide_message();
        }

        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.len()).max().unwrap() + 2) as TermInt;
        let center = (self.width / 2, self.height / 2);
        let top_left = (center.0 - msg_width / 2, center.1 - msg_height / 2);

        // Print the top and bottom empty lines
        for y in [top_left.1, top_left.1 + msg_height - 1].iter() {
            for x_diff in 0..msg_width {
                self.print_at_no_save((top_left.0 + x_diff, *y), ' ');
            }
        }

        // Print the message lines
        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            for (x_diff, ch) in padded_line.char_indices() {
                self.print_at_no_save((top_left.0 + x_diff as TermInt, y), ch);
            }
        }

        self.current_msg = Some(Message::new(msg_width, msg_height, top_left));
        self.flush();
    }

    pub fn hide_message(&mut self) {
        if !self.has_message() {
            return;
        }

        let msg = self.current_msg.take().unwrap(); // take() sets current_msg to None
        let top_left = msg.top_left();

        // Restore the content from the screen buffer
        for y_diff in 0..msg.height() {
            for x_diff in 0..msg.width() {
                let (x, y) = (top_left.0 + x_diff, top_left.1 + y_diff);
                let (ch, color) = self.screen[self.width as usize * y as usize + x as usize];
                self.print_at((x, y), ch, color);
            }
        }

        self.flush();
    }

    pub fn clear(&mut self) {
        execute!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");
        self.screen = vec![(' ', Color::Reset); self.width as usize * self.height as usize]
    }

    pub fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    pub fn has_message(&self) -> bool {
        self.current_msg.is_some()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_cell(&mut self, cell: Cell, ch: char, color: Color) {
        // Grid coordinates are offset by the one-character border.
        let pos = (cell.0 as TermInt + 1, cell.1 as TermInt + 1);
        self.print_at(pos, ch, color);
    }

    fn print_at(&mut self, pos: Coords, ch: char, color: Color) {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(color),
            style::Print(ch)
        ).unwrap();
        self.screen[self.width as usize * pos.1 as usize + pos.0 as usize] = (ch, color);
    }

    fn print_at_no_save(&mut self, pos: Coords, ch: char) {
        // To be used for printing messages, where we don't wanna overwrite our
        // local buffer to restore it when the message is hidden
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(Color::Reset),
            style::Print(ch)
        ).unwrap();
    }

    fn set_raw_mode(&self, option: bool) {
        let res = if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        };

        res.expect("Error setting raw mode.");
    }

    fn set_cursor_visibility(&mut self, option: bool) {
        let res = if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        };

        res.expect("Error setting cursor visibility.");
    }
}

impl Message {
    pub fn new(width: TermInt, height: TermInt, top_left: Coords) -> Self {
        Message { width, height, top_left }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn top_left(&self) -> Coords {
        self.top_left
    }
}
