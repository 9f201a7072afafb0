//! `urlcanon encode` / `urlcanon decode` – percent codecs.

use urlcanon_core::encode;

use crate::cli::{DecodeKind, EncodeKind};

pub fn run_encode(kind: EncodeKind, text: &str) {
    let out = match kind {
        EncodeKind::Url => encode::url_encode(text),
        EncodeKind::Path => encode::path_encode(text),
        EncodeKind::Segment => encode::segment_encode(text),
    };
    println!("{}", out);
}

pub fn run_decode(kind: DecodeKind, text: &str) {
    let out = match kind {
        DecodeKind::Url => encode::decode(text),
        DecodeKind::Path => encode::path_decode(text),
    };
    println!("{}", out);
}
