use alloc::{boxed::Box, vec::Vec};

use quickcheck::{Arbitrary, Gen};

use crate::{Scanner, class};

// Biased towards bytes the numeric and delimited grammars care about.
const ALPHABET: &[u8] = b"0123456789-.,|;: abXZ\0\n";

/// Input drawn mostly from [`ALPHABET`].
#[derive(Debug, Clone)]
pub(crate) struct Input(pub Vec<u8>);

impl Arbitrary for Input {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 48;
        let bytes = (0..len)
            .map(|_| {
                if u8::arbitrary(g) % 8 == 0 {
                    u8::arbitrary(g)
                } else {
                    *g.choose(ALPHABET).unwrap()
                }
            })
            .collect();
        Self(bytes)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Self))
    }
}

/// One scanner operation whose effect only depends on the unread input.
#[derive(Debug, Clone)]
pub(crate) enum Op {
    Bool,
    Byte,
    I8,
    I16,
    I32,
    U8,
    U16,
    U32,
    F32,
    UnsignedF32,
    CharArray(u8, bool),
    String(u8, bool),
    Skip(usize),
    SkipWhileDigits,
    SkipUntil(u8),
    JumpTo(u8),
    JumpAfter(u8),
    CompareToken(Vec<u8>),
    SearchToken(Vec<u8>),
    CompareBy,
}

/// Observable result of an [`Op`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Outcome {
    Unit,
    Bool(bool),
    Int(i64),
    /// `f32::to_bits`, so `-0.0` and `0.0` stay distinct.
    Float(u32),
    Bytes(Option<Vec<u8>>),
}

fn delimiter(g: &mut Gen) -> u8 {
    *g.choose(b"|;: 0").unwrap()
}

fn token(g: &mut Gen) -> Vec<u8> {
    let len = usize::arbitrary(g) % 3;
    (0..len).map(|_| *g.choose(ALPHABET).unwrap()).collect()
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match usize::arbitrary(g) % 20 {
            0 => Op::Bool,
            1 => Op::Byte,
            2 => Op::I8,
            3 => Op::I16,
            4 => Op::I32,
            5 => Op::U8,
            6 => Op::U16,
            7 => Op::U32,
            8 => Op::F32,
            9 => Op::UnsignedF32,
            10 => Op::CharArray(delimiter(g), bool::arbitrary(g)),
            11 => Op::String(delimiter(g), bool::arbitrary(g)),
            12 => Op::Skip(usize::arbitrary(g) % 6),
            13 => Op::SkipWhileDigits,
            14 => Op::SkipUntil(delimiter(g)),
            15 => Op::JumpTo(delimiter(g)),
            16 => Op::JumpAfter(delimiter(g)),
            17 => Op::CompareToken(token(g)),
            18 => Op::SearchToken(token(g)),
            _ => Op::CompareBy,
        }
    }
}

impl Op {
    pub(crate) fn apply(&self, s: &mut Scanner<'_>) -> Outcome {
        match self {
            Op::Bool => Outcome::Bool(s.read_bool()),
            Op::Byte => Outcome::Int(s.read_byte().into()),
            Op::I8 => Outcome::Int(s.read_i8().into()),
            Op::I16 => Outcome::Int(s.read_i16().into()),
            Op::I32 => Outcome::Int(s.read_i32().into()),
            Op::U8 => Outcome::Int(s.read_u8().into()),
            Op::U16 => Outcome::Int(s.read_u16().into()),
            Op::U32 => Outcome::Int(s.read_u32().into()),
            Op::F32 => Outcome::Float(s.read_f32().to_bits()),
            Op::UnsignedF32 => Outcome::Float(s.read_unsigned_f32().to_bits()),
            Op::CharArray(d, end) => Outcome::Bytes(s.read_span(*d, *end).map(|r| r.to_vec())),
            Op::String(d, end) => {
                Outcome::Bytes(Some(s.read_string_with(*d, *end, |_| {}).into()))
            }
            Op::Skip(n) => {
                s.skip(*n);
                Outcome::Unit
            }
            Op::SkipWhileDigits => {
                s.skip_while(class::is_digit);
                Outcome::Unit
            }
            Op::SkipUntil(d) => {
                s.skip_until(*d);
                Outcome::Unit
            }
            Op::JumpTo(d) => Outcome::Bool(s.jump_to(*d)),
            Op::JumpAfter(d) => Outcome::Bool(s.jump_after(*d)),
            Op::CompareToken(t) => Outcome::Bool(s.compare_token(t)),
            Op::SearchToken(t) => Outcome::Bool(s.search_token(t)),
            Op::CompareBy => Outcome::Bool(s.compare_by(class::is_numeric)),
        }
    }

    /// Whether this op is a typed read, i.e. inert on exhausted input.
    pub(crate) fn is_typed_read(&self) -> bool {
        matches!(
            self,
            Op::Bool
                | Op::Byte
                | Op::I8
                | Op::I16
                | Op::I32
                | Op::U8
                | Op::U16
                | Op::U32
                | Op::F32
                | Op::UnsignedF32
        )
    }
}

/// Number of quickcheck cases, mirroring the CI/local split used elsewhere.
pub(crate) fn tests() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}
