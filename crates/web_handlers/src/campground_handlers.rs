use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, web};
use campgrounds::{CampgroundFields, CampgroundStore};

use crate::async_fault::catch_async;
use crate::fault::Fault;
use crate::validation::ValidCampground;
use crate::views::{View, page};

/// Shared handle to whichever store backs the server
pub type StoreData = web::Data<dyn CampgroundStore>;

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location))
        .finish()
}

/// Renders the landing page
pub async fn home() -> HttpResponse {
    page(&View::Home)
}

/// Lists every campground
pub async fn index(store: StoreData) -> Result<HttpResponse, Fault> {
    catch_async(list_campgrounds(store.get_ref())).await
}

/// Renders the creation form
pub async fn new_form() -> HttpResponse {
    page(&View::New)
}

/// Creates a campground from a validated payload and redirects to it
pub async fn create(store: StoreData, input: ValidCampground) -> Result<HttpResponse, Fault> {
    catch_async(create_campground(store.get_ref(), input.into_inner())).await
}

/// Shows a single campground
pub async fn show(store: StoreData, path: web::Path<String>) -> Result<HttpResponse, Fault> {
    let id = path.into_inner();
    catch_async(show_campground(store.get_ref(), &id)).await
}

/// Renders the edit form for a campground
pub async fn edit_form(store: StoreData, path: web::Path<String>) -> Result<HttpResponse, Fault> {
    let id = path.into_inner();
    catch_async(edit_campground(store.get_ref(), &id)).await
}

/// Replaces a campground's fields and redirects to it
pub async fn update(
    store: StoreData,
    path: web::Path<String>,
    input: ValidCampground,
) -> Result<HttpResponse, Fault> {
    let id = path.into_inner();
    catch_async(update_campground(store.get_ref(), &id, input.into_inner())).await
}

/// Deletes a campground and redirects to the list
pub async fn destroy(store: StoreData, path: web::Path<String>) -> Result<HttpResponse, Fault> {
    let id = path.into_inner();
    catch_async(delete_campground(store.get_ref(), &id)).await
}

async fn list_campgrounds(store: &dyn CampgroundStore) -> Result<HttpResponse, Fault> {
    let campgrounds = store.list_all().await?;
    Ok(page(&View::Index {
        campgrounds: &campgrounds,
    }))
}

async fn create_campground(
    store: &dyn CampgroundStore,
    fields: CampgroundFields,
) -> Result<HttpResponse, Fault> {
    let campground = store.create(fields).await?;
    log::info!("🏕️ Created campground {} ({})", campground.id, campground.title);
    Ok(redirect(&format!("/campgrounds/{}", campground.id)))
}

async fn show_campground(store: &dyn CampgroundStore, id: &str) -> Result<HttpResponse, Fault> {
    let campground = store.get_by_id(id).await?;
    Ok(page(&View::Show {
        campground: &campground,
    }))
}

async fn edit_campground(store: &dyn CampgroundStore, id: &str) -> Result<HttpResponse, Fault> {
    let campground = store.get_by_id(id).await?;
    Ok(page(&View::Edit {
        campground: &campground,
    }))
}

async fn update_campground(
    store: &dyn CampgroundStore,
    id: &str,
    fields: CampgroundFields,
) -> Result<HttpResponse, Fault> {
    let campground = store.update_by_id(id, fields).await?;
    log::info!("✏️ Updated campground {}", campground.id);
    Ok(redirect(&format!("/campgrounds/{}", campground.id)))
}

async fn delete_campground(store: &dyn CampgroundStore, id: &str) -> Result<HttpResponse, Fault> {
    store.delete_by_id(id).await?;
    log::info!("🗑️ Deleted campground {}", id);
    Ok(redirect("/campgrounds"))
}
