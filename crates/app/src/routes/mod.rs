pub mod admin_users;
pub mod home;
pub mod not_found;
pub mod teacher_borrow;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdClipboardList, LdFlaskConical, LdLayoutDashboard, LdUsers,
};
use dioxus_free_icons::Icon;

use admin_users::AdminUsers;
use home::Home;
use not_found::NotFound;
use teacher_borrow::TeacherBorrow;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/admin/users")]
    AdminUsers {},
    #[route("/teacher/borrow")]
    TeacherBorrow {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Top navigation bar around every page.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();

    let page_title = match &route {
        Route::Home {} => "Trang chủ",
        Route::AdminUsers {} => "Quản lý người dùng",
        Route::TeacherBorrow {} => "Đăng ký mượn",
        Route::NotFound { .. } => "",
    };

    let nav_class = |active: bool| if active { "app-nav-link active" } else { "app-nav-link" };
    let home_class = nav_class(matches!(route, Route::Home {}));
    let users_class = nav_class(matches!(route, Route::AdminUsers {}));
    let borrow_class = nav_class(matches!(route, Route::TeacherBorrow {}));

    rsx! {
        document::Title { "{page_title} | Lab Portal" }
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            header { class: "app-navbar",
                Link { to: Route::Home {}, class: "app-brand",
                    Icon::<LdFlaskConical> { icon: LdFlaskConical, width: 20, height: 20 }
                    span { "Lab Portal" }
                }
                nav { class: "app-nav",
                    Link {
                        to: Route::Home {},
                        class: home_class,
                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                        "Trang chủ"
                    }
                    Link {
                        to: Route::AdminUsers {},
                        class: users_class,
                        Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 }
                        "Người dùng"
                    }
                    Link {
                        to: Route::TeacherBorrow {},
                        class: borrow_class,
                        Icon::<LdClipboardList> { icon: LdClipboardList, width: 16, height: 16 }
                        "Mượn vật tư"
                    }
                }
            }
            main { class: "app-main",
                h1 { class: "app-page-title", "{page_title}" }
                Outlet::<Route> {}
            }
        }
    }
}
