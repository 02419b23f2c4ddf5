//! Demo command - Scripted walkthrough of the list view.
//!
//! Mounts the view, creates Ann Lee, toggles Dave's developer flag,
//! removes Ann again and finally submits an incomplete form, printing the
//! rendered list after each step.

use crate::config::Config;
use crate::errors::{AppResult, OptionExt};
use crate::services::{ServiceContainer, Services};
use crate::ui::UserList;

/// Execute the demo command
pub async fn execute(config: Config) -> AppResult<()> {
    let services = Services::from_config(&config);
    let mut view = UserList::from_container(&services);

    view.mount().await;
    print_step("Mounted", &view);

    view.change_first_name("Ann");
    view.change_last_name("Lee");
    view.submit().await;
    print_step("Created Ann Lee", &view);

    let dave = find_by_first_name(&view, "Dave")?;
    view.toggle_developer(dave).await;
    print_step("Toggled Dave", &view);

    let fetched = services.users().get_user(dave).await?;
    println!("Fetched: {}\n", fetched);

    let ann = find_by_first_name(&view, "Ann")?;
    view.remove(ann).await;
    print_step("Removed Ann", &view);

    view.change_first_name("");
    view.submit().await;
    print_step("Submitted without a first name", &view);

    services.shutdown().await;
    Ok(())
}

fn find_by_first_name(view: &UserList, first_name: &str) -> AppResult<uuid::Uuid> {
    view.users()
        .iter()
        .find(|user| user.first_name == first_name)
        .map(|user| user.id)
        .ok_or_not_found()
}

fn print_step(title: &str, view: &UserList) {
    println!("=== {} ===", title);
    for line in view.render() {
        println!("  {}", line);
    }
    println!();
}
