use hyper::header::{AsHeaderName, AUTHORIZATION};
use hyper::http::request::Parts;

pub trait HeaderExt {
    fn get_header<K: AsHeaderName>(&self, header: K) -> Option<String>;
    fn authorization(&self) -> Option<String>;
}

impl HeaderExt for Parts {
    fn get_header<K>(&self, header: K) -> Option<String>
    where
        K: AsHeaderName,
    {
        self.headers
            .get(header)
            .and_then(|header| header.to_str().ok())
            .map(ToString::to_string)
    }

    fn authorization(&self) -> Option<String> {
        self.get_header(AUTHORIZATION)
    }
}
