//! Video preview panel over a native `<video>` element.
//!
//! Playback state is local to the panel and not persisted across remounts.
//! `timeupdate` positions are mirrored to an optional external callback so a
//! parent can track playback without owning the element.

use leptos::prelude::*;

use crate::util::time::format_clock;

/// Video player with play/pause, seek, volume, and mute controls. Renders
/// an empty state when no `video_url` is provided.
#[component]
pub fn VideoPlayer(
    /// Video resource locator; `None` shows the empty state.
    #[prop(optional)]
    video_url: Option<String>,
    /// Panel title shown under the media surface.
    #[prop(into, default = "AI Generated Satellite Video".to_owned())]
    title: String,
    /// Called with `(current_time, duration)` on every timing event.
    #[prop(optional)]
    on_time_update: Option<Callback<(f64, f64)>>,
) -> impl IntoView {
    let playing = RwSignal::new(false);
    let current_time = RwSignal::new(0.0_f64);
    let duration = RwSignal::new(0.0_f64);
    let volume = RwSignal::new(1.0_f64);
    let muted = RwSignal::new(false);
    let video_ref = NodeRef::<leptos::html::Video>::new();

    #[cfg(not(feature = "hydrate"))]
    let _ = on_time_update;

    let toggle_play = move |_| {
        #[cfg(feature = "hydrate")]
        if let Some(el) = video_ref.get() {
            if playing.get() {
                let _ = el.pause();
            } else {
                let _ = el.play();
            }
            playing.set(!playing.get_untracked());
        }
    };

    let on_timeupdate = move |_| {
        #[cfg(feature = "hydrate")]
        if let Some(el) = video_ref.get() {
            let current = el.current_time();
            let total = el.duration();
            current_time.set(current);
            duration.set(total);
            if let Some(callback) = on_time_update {
                callback.run((current, total));
            }
        }
    };

    let on_loaded_metadata = move |_| {
        #[cfg(feature = "hydrate")]
        if let Some(el) = video_ref.get() {
            duration.set(el.duration());
        }
    };

    let on_seek = move |ev| {
        let Ok(time) = event_target_value(&ev).parse::<f64>() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        if let Some(el) = video_ref.get() {
            el.set_current_time(time);
        }
        current_time.set(time);
    };

    let on_volume_change = move |ev| {
        let Ok(level) = event_target_value(&ev).parse::<f64>() else {
            return;
        };
        volume.set(level);
        #[cfg(feature = "hydrate")]
        if let Some(el) = video_ref.get() {
            el.set_volume(level);
        }
    };

    let toggle_mute = move |_| {
        let next = !muted.get();
        muted.set(next);
        #[cfg(feature = "hydrate")]
        if let Some(el) = video_ref.get() {
            el.set_muted(next);
        }
    };

    let media = match video_url {
        Some(url) => view! {
            <video
                class="video-player__media"
                node_ref=video_ref
                on:timeupdate=on_timeupdate
                on:loadedmetadata=on_loaded_metadata
            >
                <source src=url type="video/mp4"/>
                "Your browser does not support the video tag."
            </video>
        }
        .into_any(),
        None => view! {
            <div class="video-player__empty">
                <p>"No video loaded"</p>
                <p class="video-player__hint">"Generate a video from satellite data"</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="video-player">
            <div class="video-player__surface">{media}</div>

            <div class="video-player__info">
                <h3>{title}</h3>
                <p class="video-player__subtitle">
                    "AI-enhanced satellite imagery \u{2022} RIFE interpolation"
                </p>
            </div>

            <div class="video-player__controls">
                <div class="video-player__progress">
                    <span>{move || format_clock(current_time.get())}</span>
                    <input
                        class="video-player__seek"
                        type="range"
                        min="0"
                        max=move || duration.get().max(0.0).to_string()
                        step="any"
                        prop:value=move || current_time.get().to_string()
                        on:input=on_seek
                    />
                    <span>{move || format_clock(duration.get())}</span>
                </div>

                <div class="video-player__buttons">
                    <button class="btn video-player__play" on:click=toggle_play>
                        {move || if playing.get() { "Pause" } else { "Play" }}
                    </button>

                    <button class="btn video-player__mute" on:click=toggle_mute>
                        {move || if muted.get() { "Unmute" } else { "Mute" }}
                    </button>
                    <input
                        class="video-player__volume"
                        type="range"
                        min="0"
                        max="1"
                        step="0.1"
                        prop:value=move || {
                            if muted.get() { "0".to_owned() } else { volume.get().to_string() }
                        }
                        on:input=on_volume_change
                    />
                </div>
            </div>
        </div>
    }
}
