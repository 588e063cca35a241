/// Home route of the docs site, judged from `location.hash`.
#[inline]
pub fn is_home_route(hash: &str) -> bool {
    matches!(hash, "" | "#" | "#/" | "#/home")
}
