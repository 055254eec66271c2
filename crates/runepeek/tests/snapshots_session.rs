#![expect(missing_docs)]

use core::fmt::Write;

use runepeek::{CodePointSource, Lookahead, StrSource, Utf8Source};

#[derive(Clone, Copy)]
enum Call {
    Read,
    Peek(usize),
}

fn render_session<S: CodePointSource>(source: S, calls: &[Call]) -> String {
    let mut peeker = Lookahead::new(source);
    let mut out = String::new();
    for call in calls {
        let written = match *call {
            Call::Read => match peeker.read() {
                Ok(cp) => write!(out, "read = {:?} {}B", cp.ch, cp.ch_len),
                Err(err) => write!(out, "read = {err}"),
            },
            Call::Peek(n) => match peeker.peek(n) {
                Ok(chars) => write!(out, "peek({n}) = {:?}", String::from_iter(chars)),
                Err(err) => write!(
                    out,
                    "peek({n}) = {:?}, {}",
                    String::from_iter(err.partial()),
                    err.source_error()
                ),
            },
        };
        written.unwrap();
        writeln!(out, " (buffered {})", peeker.buffered()).unwrap();
    }
    out
}

#[test]
fn snapshot_reference_stream_session() {
    use Call::{Peek, Read};

    let calls = [
        Peek(1),
        Read,
        Read,
        Read,
        Peek(4),
        Read,
        Read,
        Read,
        Read,
        Peek(10),
        Read,
        Read,
        Read,
        Read,
        Read,
        Peek(10),
        Peek(0),
    ];

    insta::assert_snapshot!(render_session(StrSource::new("Héllô ¥º®£Ð"), &calls), @r#"
    peek(1) = "H" (buffered 1)
    read = 'H' 1B (buffered 0)
    read = 'é' 2B (buffered 0)
    read = 'l' 1B (buffered 0)
    peek(4) = "lô ¥" (buffered 4)
    read = 'l' 1B (buffered 3)
    read = 'ô' 2B (buffered 2)
    read = ' ' 1B (buffered 1)
    read = '¥' 2B (buffered 0)
    peek(10) = "º®£Ð", end of input (buffered 4)
    read = 'º' 2B (buffered 3)
    read = '®' 2B (buffered 2)
    read = '£' 2B (buffered 1)
    read = 'Ð' 2B (buffered 0)
    read = end of input (buffered 0)
    peek(10) = "", end of input (buffered 0)
    peek(0) = "" (buffered 0)
    "#);
}

#[test]
fn snapshot_decode_error_session() {
    use Call::{Peek, Read};

    let calls = [Peek(4), Read, Read, Read, Peek(1), Peek(0)];

    insta::assert_snapshot!(render_session(Utf8Source::new(b"ok\xFFrest"), &calls), @r#"
    peek(4) = "ok", invalid UTF-8: 1 invalid byte(s) at offset 2 (buffered 2)
    read = 'o' 1B (buffered 1)
    read = 'k' 1B (buffered 0)
    read = invalid UTF-8: 1 invalid byte(s) at offset 2 (buffered 0)
    peek(1) = "", invalid UTF-8: 1 invalid byte(s) at offset 2 (buffered 0)
    peek(0) = "" (buffered 0)
    "#);
}
