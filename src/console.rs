use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue, style, terminal,
};
use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

/// Asks for `label` on stdout until stdin yields a value that parses as `T`
pub fn prompt<T: FromStr>(label: &str) -> io::Result<T> {
    prompt_with(&mut io::stdin().lock(), &mut io::stdout(), label)
}

fn prompt_with<T, R, W>(input: &mut R, output: &mut W, label: &str) -> io::Result<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{label}: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no value entered for {label}"),
            ));
        }
        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "{:?} is not a valid {label}", line.trim())?,
        }
    }
}

pub enum ConsoleCommand {
    Exit,
    Handled,
}

/// Draws whole frames onto the alternate screen of a raw-mode terminal
///
/// The main screen, cooked mode and the cursor are restored when dropped.
pub struct ConsoleRender;
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }

    /// Replaces the screen with `frame` followed by a `status` line
    pub fn render(&mut self, frame: &str, status: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;

        // raw mode ignores '\n' as a carriage return, so place every line explicitly
        let mut row: u16 = 0;
        for line in frame.lines().chain([status]) {
            queue!(stdout, cursor::MoveTo(0, row), style::Print(line))?;
            row = row.saturating_add(1);
        }

        stdout.flush()
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is preset for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        Ok(Some(Self::command(event::read()?)))
    }

    /// Blocks until a quit key is pressed
    pub fn wait_for_exit(&mut self) -> io::Result<()> {
        loop {
            if let ConsoleCommand::Exit = Self::command(event::read()?) {
                return Ok(());
            }
        }
    }

    fn command(event: event::Event) -> ConsoleCommand {
        match event {
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | event::Event::Key(KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }) => ConsoleCommand::Exit,
            _ => ConsoleCommand::Handled,
        }
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        terminal::disable_raw_mode().expect("disable raw mode");
        execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen)
            .expect("leave alternate screen");
    }
}
