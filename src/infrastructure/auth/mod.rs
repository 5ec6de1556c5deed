mod hmac_token;

pub use hmac_token::HmacTokenVerifier;
