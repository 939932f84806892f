/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers;
    use dotenvy::dotenv;
    use photobucket::api::{Client, Creds, HttpMethod, PhotobucketError};

    #[test]
    fn login_url_from_provided_token() {
        let client = Client::new(Creds::from_tokens("key", "secret", None, None));
        let url = client.login_url(Some("reqtok"), Some("myextra")).unwrap();
        assert_eq!(
            url,
            "http://photobucket.com/apilogin/login?extra=myextra&oauth_token=reqtok"
        );
    }

    #[test]
    fn login_url_falls_back_to_client_token() {
        let client = Client::new(Creds::from_tokens(
            "key",
            "secret",
            Some("reqtok"),
            Some("reqsecret"),
        ));
        let url = client.login_url(None, None).unwrap();
        assert_eq!(url, "http://photobucket.com/apilogin/login?oauth_token=reqtok");
    }

    #[test]
    fn login_url_without_any_token_fails() {
        let client = Client::new(Creds::from_tokens("key", "secret", None, None));
        let err = client.login_url(None, None).unwrap_err();
        assert!(matches!(err, PhotobucketError::Auth(_)));
    }

    // Disabling for ci/cd builds since these need a real key and a user that
    // completed the web login.
    #[ignore]
    #[tokio::test]
    async fn ping_live() {
        dotenv().ok();
        let creds = helpers::get_full_auth_creds().unwrap();
        let client = Client::new(creds);
        let resp = client.ping(HttpMethod::Get).await.unwrap();
        println!("Ping response: {}", resp.text());
    }

    #[ignore]
    #[tokio::test]
    async fn get_timestamp_live() {
        dotenv().ok();
        let creds = helpers::get_full_auth_creds().unwrap();
        let client = Client::new(creds);
        let resp = client.get_timestamp().await.unwrap();
        println!("Timestamp response: {}", resp.text());
    }

    #[ignore]
    #[tokio::test]
    async fn login_request_live() {
        dotenv().ok();
        let creds = helpers::get_consumer_only_creds().unwrap();
        let client = Client::new(creds);
        let resp = client.login_request().await.unwrap();
        println!("Login request response: {}", resp.text());
    }
}
