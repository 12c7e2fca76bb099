use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::ui::Badge;

pub fn copyright_line(year: i32) -> String {
    format!("© {} FormLab. Open source under Vishal Vyas.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-content">
                <div class="brand">
                    <span class="wordmark wordmark-small gradient-text">{"FormLab"}</span>
                    <Badge class="badge-accent">{"Open Source"}</Badge>
                </div>
                <p class="footer-copy">{ copyright_line(year) }</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_mentions_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 FormLab. Open source under Vishal Vyas."
        );
    }
}
