//! End-to-end checks of the `urls` helpers through the public API.

use urlcanon_core::urls;
use urlcanon_core::{Canonicalizer, PathStyle, SchemeRegistry, Url, UrlError};

fn url(s: &str) -> Url {
    s.parse().unwrap()
}

#[test]
fn canonicalize_family() {
    let cases = [
        ("file:///usr/share/../share", "file:///usr/share"),
        ("file:///usr/share/../share/../lib", "file:///usr/lib"),
        ("file:///usr/share/../share/../lib/../../var", "file:///var"),
    ];
    for (input, expected) in cases {
        let canonical = urls::canonicalize_url(Some(&url(input))).unwrap();
        assert_eq!(canonical, url(expected));
        assert_eq!(urls::canonicalize_url(Some(&canonical)), Some(canonical.clone()));
    }
    assert!(urls::canonicalize_url(None).is_none());
}

#[test]
fn names_and_parents() {
    assert_eq!(urls::name(&url("file:///usr/share/../share.txt")), "share.txt");
    assert_eq!(urls::short_name(&url("file:///etc/resolv.conf")), "resolv");
    assert_eq!(
        urls::short_name(&url("file:///usr/share/../share/../lib/../../var")),
        "var"
    );
    assert_eq!(
        urls::parent(Some(&url("file:///usr/local/bin/../lib/../bin"))),
        Some(url("file:///usr/local/bin/../lib/.."))
    );
    assert_eq!(
        urls::canonical_parent(Some(&url("file:///usr/share/../share"))),
        Some(url("file:///usr"))
    );
    assert!(urls::canonical_parent(None).is_none());
}

#[test]
fn joins_on_both_styles() {
    let unix = Canonicalizer::new(PathStyle::Unix, SchemeRegistry::default());
    assert_eq!(
        unix.make_canonical_url_from_base("/etc/", "/resolv.conf").unwrap(),
        url("file:///etc/resolv.conf")
    );
    let windows = Canonicalizer::new(PathStyle::Windows, SchemeRegistry::default());
    assert_eq!(
        windows
            .make_canonical_url_from_base("\\c:\\Windows\\", "\\system32")
            .unwrap(),
        url("file:///c:/Windows/system32")
    );
    assert_eq!(
        urls::make_canonical_url_from_base("http://www.google.com", "/webhp").unwrap(),
        url("http://www.google.com/webhp")
    );
    assert_eq!(
        urls::make_canonical_url_from_path("http://www.google.com/webhp").unwrap(),
        url("http://www.google.com/webhp")
    );
}

#[test]
fn classification() {
    assert!(urls::is_local(&url("jar:file:/root/app.jar!/repository")));
    assert!(!urls::is_local(&url("file://hostname/path/to/the%20file.txt")));
    assert_eq!(urls::is_absolute(Some("http://www.google.com/")), Ok(true));
    assert_eq!(urls::is_absolute(Some(".bashrc")), Ok(false));
    assert!(matches!(urls::is_absolute(None), Err(UrlError::NullArgument(_))));
}

#[test]
fn external_form() {
    assert_eq!(
        urls::to_external_form(&url("http://www.google.com/webhp")),
        "http://www.google.com/webhp"
    );
    assert!(urls::to_external_form_str("fbiy384ehd").is_err());
}

#[test]
fn codecs() {
    assert_eq!(urls::decode("%2B+"), "+ ");
    assert_eq!(urls::url_encode("+ "), "%2B+");
    assert_eq!(urls::path_encode(":@!$&'()*+,;=-._~"), ":@!$&'()*+,;=-._~");
    assert_eq!(urls::path_encode("+ "), "+%20");
    assert_eq!(urls::decode("!$&'()*,;="), "!$&'()*,;=");
    assert_eq!(urls::path_decode("+%2B+"), "+++");
}

#[test]
fn local_queries() {
    let dir = tempfile::tempdir().unwrap();
    let dir_url = Url::from_file_path(dir.path()).unwrap();
    assert!(urls::exists(&dir_url));
    assert!(urls::last_modified(&dir_url) > 0);

    let missing = Url::from_file_path(&dir.path().join("ngfodbbgfid")).unwrap();
    assert!(!urls::exists(&missing));
    assert_eq!(urls::last_modified(&missing), urls::UNKNOWN_LAST_MODIFIED);
}
