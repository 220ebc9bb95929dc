use common::query_params::QueryParams;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::project_components::project_layout::ProjectLayout;
use crate::pages::info_pages::{AboutPage, ConnectPage, LngPage, ProcessPage};
use crate::pages::not_found_page::NotFoundPage;
use crate::pages::project_pages::{
    AuthorizationsPage, BackgroundPage, CompliancePage, MapPage, NationsPage, OverviewPage, PlansPage,
};
use crate::pages::projects_page::ProjectsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[redirect("/", || Route::ProjectsPage {})]
    #[route("/projects")]
    ProjectsPage {},


    #[nest("/project/:id")]
        #[layout(ProjectLayout)]
            #[route("/overview")]
            OverviewPage { id: u32 },

            #[route("/background")]
            BackgroundPage { id: u32 },

            #[route("/authorizations")]
            AuthorizationsPage { id: u32 },

            #[route("/compliance?:..query")]
            CompliancePage { id: u32, query: QueryParams },

            #[route("/nations")]
            NationsPage { id: u32 },

            #[route("/plans")]
            PlansPage { id: u32 },

            #[route("/map")]
            MapPage { id: u32 },
        #[end_layout]
    #[end_nest]


    #[redirect("/project/:id", |id: u32| Route::OverviewPage { id })]
    #[route("/process")]
    ProcessPage {},

    #[route("/lng")]
    LngPage {},

    #[route("/about")]
    AboutPage {},

    #[route("/connect")]
    ConnectPage {},

    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },

}

impl Route {
    pub fn compliance_page(id: u32) -> Self {
        Self::CompliancePage { id, query: QueryParams::default() }
    }
}
