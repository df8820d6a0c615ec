#[cfg(target_family = "unix")]
fn main() -> std::io::Result<()> {
    use marktty::cmd::{Direction, EraseLine, HideCursor, MoveCursor, ShowCursor};
    use marktty::fuse;
    use marktty::opt::Options;
    use marktty::RawMode;
    use std::io::{Read, Write};
    use std::os::fd::AsFd;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let raw = RawMode::enter(stdin.as_fd(), &Options::with_log())?;

    write!(stdout, "{}press keys, q to quit\r\n", HideCursor)?;
    stdout.flush()?;

    let mut input = stdin.lock();
    let mut buffer = [0; 16];
    loop {
        let count = input.read(&mut buffer)?;
        if count == 0 || buffer[..count].contains(&b'q') {
            break;
        }

        write!(
            stdout,
            "{}{:?}",
            fuse!(MoveCursor(Direction::Column, 1), EraseLine),
            &buffer[..count]
        )?;
        stdout.flush()?;
    }

    write!(stdout, "\r\n{}", ShowCursor)?;
    stdout.flush()?;
    raw.restore()
}

#[cfg(not(target_family = "unix"))]
fn main() {}
