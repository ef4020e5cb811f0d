// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! End-to-end coverage of `spec.md` §8 property 4 and scenario S1: a bad URL must
//! fail setup before any facade call is possible, and only through `Error::InvalidUrl`.

use unrealircd_rpc::{connection_factory, Error, SetupParams};

async fn setup_with(url: &str) -> Result<(), Error> {
    connection_factory(
        "http",
        SetupParams::Https { url: url.to_string(), username: "u".into(), password: "p".into() },
    )
    .await
    .map(|_conn| ())
}

#[tokio::test]
async fn a_well_formed_url_sets_up_successfully() {
    assert!(setup_with("https://h.example:8600/api").await.is_ok());
}

#[tokio::test]
async fn missing_scheme_is_rejected() {
    assert!(matches!(setup_with("h.example:8600/api").await, Err(Error::InvalidUrl(_))));
}

#[tokio::test]
async fn missing_port_is_rejected() {
    assert!(matches!(setup_with("https://h.example/api").await, Err(Error::InvalidUrl(_))));
}

#[tokio::test]
async fn missing_path_is_rejected() {
    assert!(matches!(setup_with("https://h.example:8600").await, Err(Error::InvalidUrl(_))));
}

#[tokio::test]
async fn unknown_factory_tag_is_rejected() {
    let result = connection_factory(
        "ftp",
        SetupParams::Https { url: "https://h.example:8600/api".into(), username: "u".into(), password: "p".into() },
    )
    .await;
    assert!(matches!(result, Err(Error::UnknownTag(tag)) if tag == "ftp"));
}
