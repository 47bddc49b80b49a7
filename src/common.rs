use url::Url;

uniffi::custom_type!(Url, String, {
    remote,
    try_lift: |url| Ok(Url::parse(&url)?),
    lower: |url| url.to_string(),
});
