//! Site header with the main navigation links.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdInfo};
use dioxus_free_icons::icons::md_communication_icons::MdChat;
use dioxus_free_icons::icons::md_social_icons::MdPublic;
use dioxus_free_icons::icons::go_icons::GoRepo;
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared page frame: header on top, routed page below.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",


            div {
                id:"x-nav-header",
                style:"
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 40px;
                    width: 100%;
                    height: 64px;
                    flex-shrink: 0;
                    background-color: #003366;
                    border-bottom: 2px solid #FCBA19;
                    padding: 0px 24px;
                ",

                NavbarSiteTitle{},

                // empty space
                div {
                    style: "flex-grow:1;"
                }

                NavbarLinks{},
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-height: 100px; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn NavbarSiteTitle() -> Element {
    rsx! {
        Link {
            to: Route::ProjectsPage { },
            style: "color: white; text-decoration: none; font-size: 22px; font-weight: 500;",
            "LNG Project Disclosure"
        }
    }
}

#[component]
fn NavbarLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: row;
                gap: 24px;
                align-items: center;
            ",
            IconLink { to: Route::ProjectsPage { }, icon: MdHome, label: "Projects" }
            IconLink { to: Route::ProcessPage { }, icon: GoRepo, label: "Process" }
            IconLink { to: Route::LngPage { }, icon: MdPublic, label: "LNG in BC" }
            IconLink { to: Route::AboutPage { }, icon: MdInfo, label: "About" }
            IconLink { to: Route::ConnectPage { }, icon: MdChat, label: "Connect" }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            style: "display:flex; align-items:center; gap: 6px; color:white; text-decoration: none; font-size: 16px;",
            Icon { icon: icon, style: "width: 22px; height: 22px;" }
            "{label}"
        }
    }
}
