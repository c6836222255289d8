//! Social share link generation.

use serde::Serialize;

const FACEBOOK_QUOTE: &str = "Check out PPE Marts - Find PPE kits and calculate your requirements!";
const TWEET_TEXT: &str = "PPE Marts - PPE kits and calculator tools for safety professionals";
const EMAIL_SUBJECT: &str = "Check out PPE Marts - PPE Calculator & Products";

/// Share targets for one page URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
    pub email: String,
}

impl ShareLinks {
    /// Build share links for `page_url`. Every query component is
    /// percent-encoded.
    pub fn for_url(page_url: &str) -> Self {
        let url = urlencoding::encode(page_url);

        let body = format!(
            "I found this useful PPE website:\n\n{}\n\nIt has PPE calculators and affiliate links to safety products.",
            page_url
        );

        Self {
            facebook: format!(
                "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
                url,
                urlencoding::encode(FACEBOOK_QUOTE)
            ),
            twitter: format!(
                "https://twitter.com/intent/tweet?url={}&text={}",
                url,
                urlencoding::encode(TWEET_TEXT)
            ),
            linkedin: format!("https://www.linkedin.com/sharing/share-offsite/?url={}", url),
            email: format!(
                "mailto:?subject={}&body={}",
                urlencoding::encode(EMAIL_SUBJECT),
                urlencoding::encode(&body)
            ),
        }
    }
}
