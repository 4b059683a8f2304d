#[cfg(test)]
mod tests {
    use crate::booking::session_cookie;

    #[test]
    fn session_cookie_matches_api_expectation() {
        assert_eq!(session_cookie("abc123"), "token=abc123");
    }
}
