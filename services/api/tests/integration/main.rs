mod helpers;

mod media_test;
mod profile_test;
mod router_test;
