#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use runepeek::{CodePointSource, InvalidUtf8, Lookahead, SourceError, Utf8Options, Utf8Source};

#[derive(Debug, Arbitrary)]
enum Op {
    Read,
    Peek(u8),
    PeekChar,
}

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    replace_invalid: bool,
    ops: Vec<Op>,
    bytes: &'a [u8],
}

/// The stream as the source would yield it with no buffering in between.
struct Model {
    chars: Vec<char>,
    terminal: SourceError,
    pos: usize,
}

impl Model {
    fn new(mut source: Utf8Source<'_>) -> Self {
        let mut chars = Vec::new();
        let terminal = loop {
            match source.next_code_point() {
                Ok(cp) => chars.push(cp.ch),
                Err(err) => break err,
            }
        };
        Self {
            chars,
            terminal,
            pos: 0,
        }
    }

    fn read(&mut self) -> Result<char, SourceError> {
        let ch = *self.chars.get(self.pos).ok_or(self.terminal)?;
        self.pos += 1;
        Ok(ch)
    }

    fn peek(&self, n: usize) -> (&[char], Option<SourceError>) {
        let end = (self.pos + n).min(self.chars.len());
        let err = (self.pos + n > self.chars.len()).then_some(self.terminal);
        (&self.chars[self.pos..end], err)
    }
}

fn run(input: Input<'_>) {
    let options = Utf8Options {
        invalid: if input.replace_invalid {
            InvalidUtf8::Replace
        } else {
            InvalidUtf8::Fail
        },
    };

    let mut model = Model::new(Utf8Source::with_options(input.bytes, options));
    let mut peeker = Lookahead::new(Utf8Source::with_options(input.bytes, options));

    for op in input.ops {
        match op {
            Op::Read => {
                assert_eq!(peeker.read().map(|cp| cp.ch), model.read());
            }
            Op::Peek(n) => {
                let n = usize::from(n % 64);
                let (expected, expected_err) = model.peek(n);
                match peeker.peek(n) {
                    Ok(chars) => {
                        assert_eq!(chars, expected);
                        assert_eq!(expected_err, None);
                    }
                    Err(err) => {
                        assert_eq!(err.partial(), expected);
                        assert_eq!(Some(err.source_error()), expected_err);
                    }
                }
            }
            Op::PeekChar => {
                let (expected, expected_err) = model.peek(1);
                match peeker.peek_char() {
                    Ok(ch) => assert_eq!(expected, [ch]),
                    Err(err) => assert_eq!(Some(err), expected_err),
                }
            }
        }
    }

    while let Ok(expected) = model.read() {
        assert_eq!(peeker.read().map(|cp| cp.ch), Ok(expected));
    }
    assert_eq!(peeker.read().map(|cp| cp.ch), Err(model.terminal));
}

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = Input::arbitrary_take_rest(arbitrary::Unstructured::new(data)) {
        run(input);
    }
});
