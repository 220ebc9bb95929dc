pub mod router_navigation;
