use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::i18n::{Content, Lang};

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    pub lang: Lang,
    pub on_close: Callback<MouseEvent>,
}

/// Overlay with the embedded demo player. Clicking the backdrop or the
/// close button dismisses it; clicks inside the dialog are swallowed so
/// they never reach the backdrop handler.
#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    let t = Content::get(props.lang);

    let stop_propagation = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <div class="video-overlay" onclick={props.on_close.clone()}>
            <div class="video-dialog" onclick={stop_propagation}>
                <button class="video-close" onclick={props.on_close.clone()}>
                    {"× "}{t.misc.close}
                </button>
                <div class="video-frame">
                    <iframe
                        src={config::DEMO_VIDEO_URL}
                        title="How birqadam.kz works"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                        allowfullscreen={true}
                    ></iframe>
                </div>
            </div>

            <style>
                {r#"
                .video-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: grid;
                    place-items: center;
                    padding: 1rem;
                    background: rgba(15, 23, 42, 0.6);
                }

                .video-dialog {
                    position: relative;
                    width: 100%;
                    max-width: 48rem;
                    overflow: hidden;
                    border-radius: 24px;
                    background: #fff;
                }

                .video-close {
                    position: absolute;
                    top: 0.75rem;
                    right: 0.75rem;
                    z-index: 1;
                    padding: 0.25rem 0.75rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.7);
                    font-size: 0.9rem;
                    cursor: pointer;
                }

                .video-frame {
                    aspect-ratio: 16 / 9;
                    width: 100%;
                    background: #f1f5f9;
                }

                .video-frame iframe {
                    width: 100%;
                    height: 100%;
                    border: 0;
                }
                "#}
            </style>
        </div>
    }
}
