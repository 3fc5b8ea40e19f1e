use std::{
    io::{self, BufReader, Read, Write},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

/// Blocks on the channel whenever its buffered chunk runs out, like a pipe.
struct ChannelReader {
    rx: Receiver<Vec<u8>>,
    chunk: io::Cursor<Vec<u8>>,
}

impl Read for ChannelReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let n = self.chunk.read(buf)?;
            if n > 0 || buf.is_empty() {
                return Ok(n);
            }
            match self.rx.recv() {
                Ok(chunk) => self.chunk = io::Cursor::new(chunk),
                Err(mpsc::RecvError) => return Ok(0),
            }
        }
    }
}

struct ChannelWriter(Sender<Vec<u8>>);

impl Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .send(buf.to_vec())
            .map_err(|e| io::Error::new(io::ErrorKind::BrokenPipe, e))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Collects output until it ends with `suffix`.
fn read_until_suffix(rx: &Receiver<Vec<u8>>, suffix: &str) -> String {
    let mut output = Vec::new();
    while !output.ends_with(suffix.as_bytes()) {
        let chunk = rx
            .recv_timeout(Duration::from_secs(10))
            .unwrap_or_else(|e| panic!("no output after {output:?}: {e}"));
        output.extend(chunk);
    }
    String::from_utf8(output).unwrap()
}

#[test]
fn replies_to_each_line_before_the_next_arrives() {
    let (input_tx, input_rx) = mpsc::channel();
    let (output_tx, output_rx) = mpsc::channel();
    let session = thread::spawn(move || {
        let mut stdin = BufReader::new(ChannelReader {
            rx: input_rx,
            chunk: io::Cursor::new(Vec::new()),
        });
        repl::run(&mut stdin, &mut ChannelWriter(output_tx))
    });

    assert_eq!(read_until_suffix(&output_rx, "-> "), "-> ");
    for (line, reply) in [
        ("7\n", "7 is a prime number!\n-> "),
        ("hello\n", "Please enter a whole number!\n-> "),
        ("-42\n", "Negative numbers are not prime, by definition!\n-> "),
    ] {
        input_tx.send(line.as_bytes().to_vec()).unwrap();
        assert_eq!(read_until_suffix(&output_rx, "-> "), reply);
    }

    // a line split across writes is still answered once it is complete
    input_tx.send(b"1".to_vec()).unwrap();
    input_tx.send(b"5\n".to_vec()).unwrap();
    assert_eq!(
        read_until_suffix(&output_rx, "-> "),
        "15 is not a prime number because it is divisible by 3!\n-> "
    );

    input_tx.send(b"q\n".to_vec()).unwrap();
    let summary = session.join().unwrap().unwrap();
    assert!(summary.quit);
    assert_eq!(summary.checked, 3);
    assert_eq!(summary.primes, 1);
    assert!(output_rx.try_iter().next().is_none());
}

#[test]
fn closing_the_input_ends_the_session() {
    let (input_tx, input_rx) = mpsc::channel::<Vec<u8>>();
    let (output_tx, output_rx) = mpsc::channel();
    let session = thread::spawn(move || {
        let mut stdin = BufReader::new(ChannelReader {
            rx: input_rx,
            chunk: io::Cursor::new(Vec::new()),
        });
        repl::run(&mut stdin, &mut ChannelWriter(output_tx))
    });

    input_tx.send(b"2\n".to_vec()).unwrap();
    assert_eq!(
        read_until_suffix(&output_rx, "2 is a prime number!\n-> "),
        "-> 2 is a prime number!\n-> "
    );
    drop(input_tx);

    let summary = session.join().unwrap().unwrap();
    assert!(!summary.quit);
    assert_eq!(summary.lines, 1);
}
