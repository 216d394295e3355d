// Concurrency tests for the Scratch pool
// Tests cover: many simultaneous callers, forced contention, no cross-talk

use std::io::{self, Cursor, Read};
use std::sync::mpsc;
use std::sync::{Arc, Barrier};
use std::thread;

use scratchio::Scratch;

const THREADS: usize = 1000;

/// Distinct per-thread text, sized so some calls grow the shared buffer.
fn text_for(id: usize) -> String {
    let unit = format!("[{id}:日本語]");
    unit.repeat(1 + id % 150)
}

#[test]
fn test_many_simultaneous_reads() {
    let scratch = Arc::new(Scratch::default());
    let start = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|id| {
            let scratch = Arc::clone(&scratch);
            let start = Arc::clone(&start);
            thread::spawn(move || {
                let s = text_for(id);
                start.wait();
                let (n, got) = scratch
                    .read(&mut Cursor::new(s.as_bytes()), s.len())
                    .unwrap();
                assert_eq!(n, s.len());
                assert_eq!(got, s, "thread {id} saw foreign bytes");
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(scratch.stats().total(), THREADS as u64);
}

#[test]
fn test_many_simultaneous_writes() {
    let scratch = Arc::new(Scratch::default());
    let start = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|id| {
            let scratch = Arc::clone(&scratch);
            let start = Arc::clone(&start);
            thread::spawn(move || {
                let s = text_for(id);
                let mut sink: Vec<u8> = Vec::with_capacity(s.len());
                start.wait();
                let n = scratch.write(&mut sink, &s).unwrap();
                assert_eq!(n, s.len());
                assert_eq!(sink, s.as_bytes(), "thread {id} wrote foreign bytes");
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(scratch.stats().total(), THREADS as u64);
}

#[test]
fn test_many_simultaneous_positioned_calls_on_global_pool() {
    let handles: Vec<_> = (0..64)
        .map(|id| {
            thread::spawn(move || {
                let s = text_for(id * 7);
                let off = (id * 13) as u64;
                for _ in 0..50 {
                    let mut sink: Vec<u8> = Vec::new();
                    scratchio::write_at(&mut sink, &s, off).unwrap();
                    let (n, got) = scratchio::read_at(&sink, s.len(), off).unwrap();
                    assert_eq!(n, s.len());
                    assert_eq!(got, s);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_contended_call_does_not_wait() {
    /// Parks inside `read` until told to continue, holding the shared buffer.
    struct Parked {
        entered: mpsc::Sender<()>,
        resume: mpsc::Receiver<()>,
        data: &'static [u8],
    }

    impl Read for Parked {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.entered.send(()).unwrap();
            self.resume.recv().unwrap();
            let n = buf.len().min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            Ok(n)
        }
    }

    let scratch = Arc::new(Scratch::default());
    let (entered_tx, entered_rx) = mpsc::channel();
    let (resume_tx, resume_rx) = mpsc::channel();

    let holder = {
        let scratch = Arc::clone(&scratch);
        thread::spawn(move || {
            let mut source = Parked {
                entered: entered_tx,
                resume: resume_rx,
                data: b"holder",
            };
            scratch.read(&mut source, 6).unwrap()
        })
    };

    // The holder now owns the shared buffer.
    entered_rx.recv().unwrap();
    assert_eq!(scratch.capacity(), None);

    // These complete while the holder is still parked.
    let (n, got) = scratch.read(&mut Cursor::new("other"), 5).unwrap();
    assert_eq!((n, got.as_str()), (5, "other"));
    let mut sink: Vec<u8> = Vec::new();
    assert_eq!(scratch.write(&mut sink, &"w".repeat(5000)).unwrap(), 5000);

    resume_tx.send(()).unwrap();
    let (n, got) = holder.join().unwrap();
    assert_eq!((n, got.as_str()), (6, "holder"));

    let stats = scratch.stats();
    assert_eq!(stats.shared, 1);
    assert_eq!(stats.private, 2);
    // The contended 5000-byte write never grew the shared buffer.
    assert_eq!(stats.grows, 0);
    assert_eq!(scratch.capacity(), Some(1024));
}
