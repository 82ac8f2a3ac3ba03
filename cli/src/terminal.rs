//! Interactive terminal front end: key mapping and the per-phase screens.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use game_2048_engine::{Direction, EngineConfig, Input, Phase, Session};
use tracing::debug;

const CLEAR: &str = "\x1b[2J\x1b[H";

/// Run interactive mode where the user plays with the keyboard.
pub fn run_interactive(seed: Option<u64>, config: EngineConfig) -> Result<()> {
    let mut session = match seed {
        Some(seed) => Session::with_config(seed, config),
        None => Session::from_entropy(config),
    };

    let _raw = RawMode::enable().context("switching terminal to raw mode")?;
    let mut stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut buffer = [0u8; 3];

    draw(&mut stdout, &session, None)?;

    while !session.is_quit() {
        let bytes_read = stdin.read(&mut buffer).context("reading key press")?;
        if bytes_read == 0 {
            // stdin closed
            break;
        }

        let Some(input) = parse_key(&buffer[..bytes_read]) else {
            continue;
        };
        debug!(?input, "key press");

        let result = session.handle(input);
        if session.is_quit() {
            break;
        }
        let gained = (result.awarded > 0).then_some(result.awarded);
        draw(&mut stdout, &session, gained)?;
    }

    writeln!(stdout, "\nGoodbye!")?;
    stdout.flush()?;
    Ok(())
}

/// Map raw key bytes to an engine input.
fn parse_key(bytes: &[u8]) -> Option<Input> {
    match bytes {
        // Arrow keys (escape sequences)
        [27, 91, 65] => Some(Input::Move(Direction::Up)),
        [27, 91, 66] => Some(Input::Move(Direction::Down)),
        [27, 91, 67] => Some(Input::Move(Direction::Right)),
        [27, 91, 68] => Some(Input::Move(Direction::Left)),

        // WASD keys
        [b'w'] | [b'W'] => Some(Input::Move(Direction::Up)),
        [b's'] | [b'S'] => Some(Input::Move(Direction::Down)),
        [b'a'] | [b'A'] => Some(Input::Move(Direction::Left)),
        [b'd'] | [b'D'] => Some(Input::Move(Direction::Right)),

        [b'\n'] | [b'\r'] => Some(Input::Start),

        // q, Q, Ctrl+C, Esc
        [b'q'] | [b'Q'] | [3] | [27] => Some(Input::Quit),

        _ => None,
    }
}

/// Render the screen for the session's current phase.
fn draw(out: &mut impl Write, session: &Session, gained: Option<u32>) -> io::Result<()> {
    write!(out, "{}", CLEAR)?;
    write!(out, "{}", render(session, gained))?;
    out.flush()
}

fn render(session: &Session, gained: Option<u32>) -> String {
    let mut screen = String::new();
    match session.phase() {
        Phase::StartScreen => {
            screen.push_str("=== 2048 ===\n\n");
            screen.push_str("  Press Enter to Start\n");
            screen.push_str("  (Q or Esc to quit)\n");
        }
        phase => {
            screen.push_str("=== 2048 ===\n");
            screen.push_str("Controls: WASD or Arrow Keys | Q to quit\n\n");
            screen.push_str(&format!(
                "Score: {}    High Score: {}    Moves: {}\n",
                session.score(),
                session.high_score(),
                session.moves()
            ));
            screen.push_str(&session.grid().to_string());
            if let Some(points) = gained {
                screen.push_str(&format!("  +{} points!\n", points));
            }
            match phase {
                Phase::Win => screen.push_str("\n  *** You Win! ***\n  Press Q to quit\n"),
                Phase::GameOver => {
                    screen.push_str("\n  *** Game Over! ***\n");
                    screen.push_str(&format!("  Max Tile: {}\n", session.max_tile()));
                    screen.push_str("  Press Q to quit\n");
                }
                _ => {}
            }
        }
    }
    screen
}

/// Puts the terminal in non-canonical, no-echo mode until dropped.
#[cfg(unix)]
struct RawMode {
    original: libc::termios,
}

#[cfg(unix)]
impl RawMode {
    fn enable() -> io::Result<Self> {
        use std::os::unix::io::AsRawFd;

        let fd = io::stdin().as_raw_fd();
        // SAFETY: termios is plain data and tcgetattr fully initializes it on success.
        unsafe {
            let mut termios: libc::termios = std::mem::zeroed();
            if libc::tcgetattr(fd, &mut termios) != 0 {
                return Err(io::Error::last_os_error());
            }
            let original = termios;
            termios.c_lflag &= !(libc::ICANON | libc::ECHO);
            termios.c_cc[libc::VMIN] = 1;
            termios.c_cc[libc::VTIME] = 0;
            if libc::tcsetattr(fd, libc::TCSANOW, &termios) != 0 {
                return Err(io::Error::last_os_error());
            }
            Ok(RawMode { original })
        }
    }
}

#[cfg(unix)]
impl Drop for RawMode {
    fn drop(&mut self) {
        use std::os::unix::io::AsRawFd;

        let fd = io::stdin().as_raw_fd();
        // SAFETY: restores the attributes captured in `enable`.
        unsafe {
            libc::tcsetattr(fd, libc::TCSANOW, &self.original);
        }
    }
}

// On non-Unix systems, just continue without raw mode.
// Interactive mode will require Enter after each key.
#[cfg(not(unix))]
struct RawMode;

#[cfg(not(unix))]
impl RawMode {
    fn enable() -> io::Result<Self> {
        Ok(RawMode)
    }
}
