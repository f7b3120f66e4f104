use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClipboardList, LdUsers};
use dioxus_free_icons::Icon;
use shared_ui::{Card, CardContent, CardHeader};

use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home-grid",
            Card {
                CardHeader {
                    title: rsx! {
                        Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                        " Quản trị"
                    },
                }
                CardContent {
                    p { "Tạo, kích hoạt hoặc vô hiệu hóa tài khoản giảng viên." }
                    Link { to: Route::AdminUsers {}, "Quản lý người dùng" }
                }
            }
            Card {
                CardHeader {
                    title: rsx! {
                        Icon::<LdClipboardList> { icon: LdClipboardList, width: 18, height: 18 }
                        " Giảng viên"
                    },
                }
                CardContent {
                    p { "Chọn vật tư, phòng thí nghiệm và gửi phiếu đăng ký mượn." }
                    Link { to: Route::TeacherBorrow {}, "Đăng ký mượn vật tư" }
                }
            }
        }
    }
}
