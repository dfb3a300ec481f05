use maud::{Markup, PreEscaped, html};

/// Rewrites the `scroll` param on return-carrying links at click time so a
/// detail page can send the visitor back to the exact spot they left.
pub fn return_link_scroll_capture() -> Markup {
    html! {
        script {
            (PreEscaped(r#"
document.addEventListener('click', function (ev) {
    var link = ev.target.closest('a[data-return-link]');
    if (!link) return;
    var url = new URL(link.href, window.location.origin);
    url.searchParams.set('scroll', String(Math.round(window.pageYOffset)));
    link.href = url.toString();
});
"#))
        }
    }
}

/// Jumps the window back to a remembered offset shortly after load. Emits
/// nothing when there is nowhere to jump to.
pub fn scroll_restore(scroll: u32) -> Markup {
    if scroll == 0 {
        return html! {};
    }
    html! {
        script {
            (PreEscaped(format!(
                "setTimeout(function () {{ window.scrollTo(0, {scroll}); }}, 100);"
            )))
        }
    }
}
