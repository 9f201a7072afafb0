//! Tests for exists, last-modified, encode and decode.

use super::parse;
use crate::cli::{Cli, CliCommand, DecodeKind, EncodeKind};
use clap::Parser;

#[test]
fn cli_parse_exists() {
    match parse(&["urlcanon", "exists", "http://fndos.grnoe.dfsn/"]) {
        CliCommand::Exists { url } => assert_eq!(url, "http://fndos.grnoe.dfsn/"),
        _ => panic!("expected Exists"),
    }
}

#[test]
fn cli_parse_last_modified() {
    match parse(&["urlcanon", "last-modified", "file:///usr"]) {
        CliCommand::LastModified { url } => assert_eq!(url, "file:///usr"),
        _ => panic!("expected LastModified"),
    }
}

#[test]
fn cli_parse_encode_kinds() {
    match parse(&["urlcanon", "encode", "url", "+ "]) {
        CliCommand::Encode { kind, text } => {
            assert_eq!(kind, EncodeKind::Url);
            assert_eq!(text, "+ ");
        }
        _ => panic!("expected Encode"),
    }
    match parse(&["urlcanon", "encode", "segment", "a/b"]) {
        CliCommand::Encode { kind, .. } => assert_eq!(kind, EncodeKind::Segment),
        _ => panic!("expected Encode"),
    }
}

#[test]
fn cli_parse_decode_kinds() {
    match parse(&["urlcanon", "decode", "path", "+%2B+"]) {
        CliCommand::Decode { kind, text } => {
            assert_eq!(kind, DecodeKind::Path);
            assert_eq!(text, "+%2B+");
        }
        _ => panic!("expected Decode"),
    }
    assert!(Cli::try_parse_from(["urlcanon", "decode", "segment", "x"]).is_err());
}
