use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Counts how many times a message has been shown or cleared, so a dismiss
/// timer can tell whether the message it was armed for is still on screen.
#[derive(Debug, Default)]
pub struct ShowGeneration {
    current: usize,
}

impl ShowGeneration {
    /// Start a new generation and return its number.
    pub fn advance(&mut self) -> usize {
        self.current = self.current.wrapping_add(1);
        self.current
    }

    pub fn is_current(&self, generation: usize) -> bool {
        self.current == generation
    }
}

/// Holds an advisory message that clears itself after a fixed delay.
#[derive(Clone)]
pub struct TimedMessage {
    /// The message currently on screen, if any.
    pub message: Option<String>,
    /// Generation of the latest `show`; changes on every call, even for a repeated message.
    pub shown: usize,
    /// Show a message and (re)start the dismiss timer.
    pub show: Callback<String>,
    /// Remove the message now and cancel any pending dismiss.
    pub clear: Callback<()>,
}

/// Custom hook for a message that auto-dismisses `delay_ms` after it is shown.
#[hook]
pub fn use_timed_message(delay_ms: u32) -> TimedMessage {
    let message_handle: UseStateHandle<Option<String>> = use_state(|| None::<String>);
    let shown_handle: UseStateHandle<usize> = use_state(|| 0usize);
    let generation = use_mut_ref(ShowGeneration::default);
    // Replacing or taking the stored Timeout drops it, which cancels it.
    let timer = use_mut_ref(|| None::<Timeout>);

    let show = {
        let message_setter = message_handle.clone();
        let shown_setter = shown_handle.clone();
        let generation = generation.clone();
        let timer = timer.clone();
        Callback::from(move |text: String| {
            let armed_for = generation.borrow_mut().advance();
            message_setter.set(Some(text));
            shown_setter.set(armed_for);

            let message_on_expiry = message_setter.clone();
            let generation_on_expiry = generation.clone();
            let handle = Timeout::new(delay_ms, move || {
                if generation_on_expiry.borrow().is_current(armed_for) {
                    message_on_expiry.set(None);
                }
            });
            *timer.borrow_mut() = Some(handle);
        })
    };

    let clear = {
        let message_setter = message_handle.clone();
        let generation = generation.clone();
        let timer = timer.clone();
        Callback::from(move |_: ()| {
            generation.borrow_mut().advance();
            timer.borrow_mut().take();
            message_setter.set(None);
        })
    };

    TimedMessage {
        message: (*message_handle).clone(),
        shown: *shown_handle,
        show,
        clear,
    }
}
