//! Reversible encoding of query text into a URL-safe share token.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

pub fn encode_share_token(query: &str) -> String {
	URL_SAFE_NO_PAD.encode(query.as_bytes())
}

/// Decodes a token produced by [`encode_share_token`]. Returns `None` for
/// anything that is not valid base64 over UTF-8 text.
pub fn decode_share_token(token: &str) -> Option<String> {
	let bytes = URL_SAFE_NO_PAD.decode(token.trim()).ok()?;
	String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_arbitrary_text() {
		let query = "SELECT ?año ?niño WHERE { ?s ?p \"Ñusta\"@es } # tilde & + /";
		assert_eq!(
			decode_share_token(&encode_share_token(query)).as_deref(),
			Some(query)
		);
	}

	#[test]
	fn token_is_url_safe() {
		let token = encode_share_token(">>>???///");
		assert!(!token.contains('+'));
		assert!(!token.contains('/'));
		assert!(!token.contains('='));
	}

	#[test]
	fn garbage_decodes_to_none() {
		assert_eq!(decode_share_token("not!!valid??token"), None);
	}
}
