/* src/site/src/pages.rs */

// Route table. Every page lives under `/{locale}`.

use std::sync::Arc;

use saminvest_server::{
  ADMIN_PUBLICATION_TAB, PUBLICATION_TAB, PageDef, PageMetadata, SiteServer, Translator,
};

use crate::components::{
  AdminMenus, AdminPublication, Dashboard, Gallery, MainDetails, PublicationItem, PublicationList,
  Templates,
};
use crate::content::ContentStore;

const ADMIN_SECTION: &str = "Admin.title";
const ADMIN_DESCRIPTION: &str = "Admin.description";

fn admin_page(page_key: &'static str) -> impl Fn(&Translator) -> PageMetadata + Send + Sync {
  move |t| PageMetadata::section(t, ADMIN_SECTION, page_key, ADMIN_DESCRIPTION)
}

fn public_page(title_key: &'static str) -> impl Fn(&Translator) -> PageMetadata + Send + Sync {
  move |t| PageMetadata::single(t, title_key, "Site.description")
}

pub fn register(server: SiteServer, content: &Arc<ContentStore>, templates: &Templates) -> SiteServer {
  let gallery = || Gallery { content: content.clone(), template: templates.gallery.clone() };
  let media = || AdminPublication {
    content: content.clone(),
    template: templates.admin_publication.clone(),
  };

  server
    // Public
    .page(PageDef::new("/", gallery()))
    .page(PageDef::new("/gallery", gallery()).metadata(public_page("Gallery.title")))
    .page(
      PageDef::tabbed(
        "/publications",
        PUBLICATION_TAB,
        PublicationList { content: content.clone(), template: templates.publication_list.clone() },
      )
      .metadata(public_page("Publications.title")),
    )
    .page(
      PageDef::tabbed(
        "/publications/{id}",
        PUBLICATION_TAB,
        PublicationItem { content: content.clone(), template: templates.publication_item.clone() },
      )
      .metadata(public_page("Publications.title")),
    )
    // Admin
    .page(
      PageDef::new(
        "/admin",
        Dashboard { content: content.clone(), template: templates.dashboard.clone() },
      )
      .metadata(admin_page("Admin.Dashboard.title")),
    )
    .page(
      PageDef::new(
        "/admin/menus",
        AdminMenus { content: content.clone(), template: templates.admin_menus.clone() },
      )
      .metadata(admin_page("Admin.Menus.title")),
    )
    .page(
      PageDef::tabbed("/admin/media", ADMIN_PUBLICATION_TAB, media())
        .metadata(admin_page("Admin.Media.title")),
    )
    .page(
      PageDef::tabbed("/admin/media/{id}", ADMIN_PUBLICATION_TAB, media())
        .metadata(admin_page("Admin.Media.title")),
    )
    .page(
      PageDef::new(
        "/admin/details",
        MainDetails { content: content.clone(), template: templates.main_details.clone() },
      )
      .metadata(admin_page("Admin.Details.title")),
    )
}
