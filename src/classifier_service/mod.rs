pub mod impl_fake;
pub mod impl_http;
#[cfg(test)]
pub mod impl_stub;
pub mod interface;
