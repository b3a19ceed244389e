#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scanlet::{CriterionCompare, Scanner, ScannerOptions, class};

#[derive(Debug, Arbitrary)]
enum Op {
    Bool,
    Byte,
    I32,
    U16,
    F32,
    UnsignedF32,
    Span(u8, bool),
    String(u8, bool),
    Skip(u8),
    SkipWhileDigits,
    SkipUntil(u8),
    JumpTo(u8),
    JumpAfter(u8),
    CompareToken(Vec<u8>),
    SearchToken(Vec<u8>),
    CompareBy,
    Reset,
}

#[derive(Debug, Arbitrary)]
struct Input {
    end_if_not_found: bool,
    matching: bool,
    consume_bool: bool,
    bytes: Vec<u8>,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let options = ScannerOptions {
        end_if_not_found: input.end_if_not_found,
        criterion_compare: if input.matching {
            CriterionCompare::Matching
        } else {
            CriterionCompare::Inverted
        },
        consume_bool: input.consume_bool,
    };
    let mut s = Scanner::with_options(&input.bytes, options);

    for op in &input.ops {
        let before = s.position();
        let rewinds = match op {
            Op::Reset => true,
            Op::Skip(_) => s.is_overflow(),
            _ => false,
        };
        match op {
            Op::Bool => {
                s.read_bool();
            }
            Op::Byte => {
                s.read_byte();
            }
            Op::I32 => {
                s.read_i32();
            }
            Op::U16 => {
                s.read_u16();
            }
            Op::F32 => {
                s.read_f32();
            }
            Op::UnsignedF32 => {
                s.read_unsigned_f32();
            }
            Op::Span(d, end) => {
                if let Some(run) = s.read_span(*d, *end) {
                    assert!(!run.contains(d));
                }
            }
            Op::String(d, end) => {
                let run = s.read_string_with(*d, *end, |_| {});
                assert!(!run.contains(d));
            }
            Op::Skip(n) => s.skip(usize::from(*n)),
            Op::SkipWhileDigits => s.skip_while(class::is_digit),
            Op::SkipUntil(d) => s.skip_until(*d),
            Op::JumpTo(d) => {
                if !s.jump_to(*d) {
                    assert_eq!(s.position(), before);
                }
            }
            Op::JumpAfter(d) => {
                s.jump_after(*d);
            }
            Op::CompareToken(t) => {
                s.compare_token(t);
            }
            Op::SearchToken(t) => {
                s.search_token(t);
            }
            Op::CompareBy => {
                let _ = s.compare_by(class::is_digit);
                assert_eq!(s.position(), before);
            }
            Op::Reset => {
                s.reset();
                assert_eq!(s.position(), 0);
            }
        }
        if !rewinds {
            assert!(s.position() >= before, "{op:?} moved the cursor backwards");
        }
        s.assert_invariants();
    }
});
