use iced::widget::{
    Column, button, column, container, pick_list, radio, row, scrollable, text, text_input,
};
use iced::{Element, Length, Task};
use sneakers_core::store_info::{APP_INFO, profile_menu};
use sneakers_core::{
    AuthError, Authenticator, CheckoutSession, Credentials, DelayOutcome, FetchError, Fit,
    ListingController, LoadTicket, OrderSummary, PageRequest, PageResult, PaymentInstruction,
    PaymentMethod, ProductId, ProductRecord, ScheduledTransition, Session, SizeSystem, Storefront,
    fetch_page, size_guide,
};
use std::sync::Arc;

const GRID_COLUMNS: usize = 2;
const CARD_WIDTH: f32 = 210.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Size,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Login,
    Main,
    Payment,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Splash
    SplashElapsed(DelayOutcome),
    SkipSplash,

    // Login
    EmailChanged(String),
    PasswordChanged(String),
    LoginPressed,
    CancelLogin,
    LoginDelayElapsed(DelayOutcome),
    LoginFinished(Result<Session, AuthError>),

    TabSelected(Tab),

    // Listing
    PageLoaded(LoadTicket, Result<PageResult<ProductRecord>, Arc<FetchError>>),
    Refresh,
    ChangePage(usize),
    ToggleFavorite(ProductId),
    ShowProduct(usize),
    CloseProduct,
    BuyNow,

    // Payment
    PaymentMethodSelected(PaymentMethod),
    Pay,
    PaymentDone,
    BackFromPayment,

    // Size guide
    FitSelected(Fit),
    SystemSelected(SizeSystem),
    SizeSelected(&'static str),

    // Profile
    OpenLink(&'static str),
    LinkOpened(Result<(), String>),
}

#[derive(Debug, Default)]
struct LoginForm {
    email: String,
    password: String,
    is_loading: bool,
    error: Option<String>,
    transition: Option<ScheduledTransition>,
}

#[derive(Debug)]
struct SizeGuideState {
    fit: Fit,
    system: SizeSystem,
    selected_size: Option<&'static str>,
}

#[derive(Debug)]
struct PaymentState {
    session: CheckoutSession,
    instruction: Option<PaymentInstruction>,
    error: Option<String>,
}

pub struct AppState {
    store: Storefront,
    screen: Screen,
    tab: Tab,
    splash: Option<ScheduledTransition>,
    login: LoginForm,
    session: Option<Session>,
    listing: ListingController,
    selected_product: Option<ProductRecord>,
    payment: Option<PaymentState>,
    size_guide: SizeGuideState,
    link_error: Option<String>,
}

impl AppState {
    pub fn new(store: Storefront) -> Self {
        let listing = store.listing();
        Self {
            store,
            screen: Screen::Splash,
            tab: Tab::Home,
            splash: None,
            login: LoginForm::default(),
            session: None,
            listing,
            selected_product: None,
            payment: None,
            link_error: None,
            size_guide: SizeGuideState {
                fit: Fit::Regular,
                system: SizeSystem::Us,
                selected_size: None,
            },
        }
    }

    fn start_load(&mut self, ticket: LoadTicket) -> Task<Message> {
        let paginator = self.listing.paginator().clone();
        Task::perform(fetch_page(paginator, ticket), move |result| {
            Message::PageLoaded(ticket, result.map_err(Arc::new))
        })
    }
}

pub fn initialize(store: Storefront) -> (AppState, Task<Message>) {
    let mut state = AppState::new(store);
    let splash = state.store.splash_transition();
    let task = Task::perform(splash.wait(), Message::SplashElapsed);
    state.splash = Some(splash);
    (state, task)
}

pub fn update(state: &mut AppState, message: Message) -> Task<Message> {
    match message {
        Message::SplashElapsed(outcome) => {
            state.splash = None;
            if outcome == DelayOutcome::Fired && state.screen == Screen::Splash {
                state.screen = Screen::Login;
            }
        }
        Message::SkipSplash => {
            if let Some(splash) = state.splash.take() {
                splash.cancel();
            }
            state.screen = Screen::Login;
        }
        Message::EmailChanged(email) => {
            state.login.email = email;
        }
        Message::PasswordChanged(password) => {
            state.login.password = password;
        }
        Message::LoginPressed => {
            if state.login.is_loading {
                return Task::none();
            }
            if state.login.email.is_empty() || state.login.password.is_empty() {
                state.login.error = Some(AuthError::MissingFields.to_string());
                return Task::none();
            }

            state.login.error = None;
            state.login.is_loading = true;
            let transition = state.store.login_transition();
            let task = Task::perform(transition.wait(), Message::LoginDelayElapsed);
            state.login.transition = Some(transition);
            return task;
        }
        Message::CancelLogin => {
            // The pending delay reports back as cancelled and clears the form.
            if let Some(transition) = &state.login.transition {
                transition.cancel();
            }
        }
        Message::LoginDelayElapsed(outcome) => {
            let cancelled = state
                .login
                .transition
                .take()
                .is_some_and(|transition| transition.is_cancelled());
            if outcome == DelayOutcome::Cancelled || cancelled {
                state.login.is_loading = false;
                return Task::none();
            }

            let auth = state.store.authenticator();
            let credentials =
                Credentials::new(state.login.email.clone(), state.login.password.clone());
            return Task::perform(
                async move { auth.authenticate(&credentials).await },
                Message::LoginFinished,
            );
        }
        Message::LoginFinished(result) => {
            state.login.is_loading = false;
            match result {
                Ok(session) => {
                    log::info!("Signed in as {}", session.email);
                    state.session = Some(session);
                    state.login.password.clear();
                    state.screen = Screen::Main;
                    state.tab = Tab::Home;
                    let ticket = state.listing.begin_load(PageRequest::first());
                    return state.start_load(ticket);
                }
                Err(e) => {
                    state.login.error = Some(e.to_string());
                }
            }
        }
        Message::TabSelected(tab) => {
            state.tab = tab;
        }
        Message::PageLoaded(ticket, result) => {
            state.listing.apply(ticket, result);
        }
        Message::Refresh => {
            let ticket = state.listing.begin_refresh();
            return state.start_load(ticket);
        }
        Message::ChangePage(page_number) => match PageRequest::new(page_number) {
            Ok(request) => {
                let ticket = state.listing.begin_change_page(request);
                return state.start_load(ticket);
            }
            Err(e) => log::warn!("Ignoring page change: {}", e),
        },
        Message::ToggleFavorite(id) => {
            state.listing.toggle_favorite(&id);
        }
        Message::ShowProduct(index) => {
            state.selected_product = state.listing.state().items.get(index).cloned();
        }
        Message::CloseProduct => {
            state.selected_product = None;
        }
        Message::BuyNow => {
            if let Some(record) = state.selected_product.take() {
                state.payment = Some(PaymentState {
                    session: CheckoutSession::new(OrderSummary::from(&record)),
                    instruction: None,
                    error: None,
                });
                state.screen = Screen::Payment;
            }
        }
        Message::PaymentMethodSelected(method) => {
            if let Some(payment) = state.payment.as_mut() {
                payment.session.select(method);
                payment.error = None;
            }
        }
        Message::Pay => {
            if let Some(payment) = state.payment.as_mut() {
                match payment.session.confirm() {
                    Ok(instruction) => payment.instruction = Some(instruction),
                    Err(e) => payment.error = Some(e.to_string()),
                }
            }
        }
        Message::PaymentDone | Message::BackFromPayment => {
            state.payment = None;
            state.screen = Screen::Main;
        }
        Message::FitSelected(fit) => {
            state.size_guide.fit = fit;
            state.size_guide.selected_size = None;
        }
        Message::SystemSelected(system) => {
            state.size_guide.system = system;
            state.size_guide.selected_size = None;
        }
        Message::SizeSelected(size) => {
            state.size_guide.selected_size = Some(size);
        }
        Message::OpenLink(link) => {
            log::info!("Opening {}", link);
            return Task::perform(
                async move {
                    open::that(link).map_err(|e| format!("Could not open {}: {}", link, e))
                },
                Message::LinkOpened,
            );
        }
        Message::LinkOpened(result) => {
            state.link_error = result.err();
            if let Some(error) = &state.link_error {
                log::warn!("{}", error);
            }
        }
    }

    Task::none()
}

pub fn view(state: &AppState) -> Element<Message> {
    match state.screen {
        Screen::Splash => splash_view(),
        Screen::Login => login_view(&state.login),
        Screen::Main => main_view(state),
        Screen::Payment => match &state.payment {
            Some(payment) => payment_view(payment),
            None => main_view(state),
        },
    }
}

fn splash_view<'a>() -> Element<'a, Message> {
    container(
        column![
            text("SNEAKERS").size(48),
            text("Your Premium Sneaker Store").size(16),
            button("Skip").on_press(Message::SkipSplash).padding(8),
        ]
        .spacing(16)
        .align_x(iced::Alignment::Center),
    )
    .center(Length::Fill)
    .into()
}

fn login_view(login: &LoginForm) -> Element<Message> {
    let mut email = text_input("Enter your email", &login.email).padding(12);
    let mut password = text_input("Enter your password", &login.password)
        .secure(true)
        .padding(12);
    if !login.is_loading {
        email = email.on_input(Message::EmailChanged);
        password = password
            .on_input(Message::PasswordChanged)
            .on_submit(Message::LoginPressed);
    }

    let mut form = column![
        text("SNEAKERS").size(42),
        text("Your Premium Sneaker Store").size(16),
        text("EMAIL").size(12),
        email,
        text("PASSWORD").size(12),
        password,
        button(if login.is_loading { "Signing in..." } else { "LOGIN" })
            .on_press_maybe(if login.is_loading {
                None
            } else {
                Some(Message::LoginPressed)
            })
            .padding(14)
            .width(Length::Fill),
    ]
    .spacing(12)
    .max_width(360.0);

    if login.transition.is_some() {
        form = form.push(
            button("Cancel")
                .on_press(Message::CancelLogin)
                .style(button::secondary)
                .padding(10)
                .width(Length::Fill),
        );
    }

    if let Some(error) = &login.error {
        form = form.push(text(error).size(14).style(text::danger));
    }

    container(form).center(Length::Fill).into()
}

fn main_view(state: &AppState) -> Element<Message> {
    let body = match state.tab {
        Tab::Home => home_view(state),
        Tab::Size => size_view(&state.size_guide),
        Tab::Profile => profile_view(state),
    };

    let tab_button = |label: &'static str, tab: Tab| {
        button(text(label))
            .on_press(Message::TabSelected(tab))
            .style(if state.tab == tab {
                button::primary
            } else {
                button::secondary
            })
            .padding(10)
            .width(Length::Fill)
    };

    column![
        container(body).height(Length::Fill).width(Length::Fill),
        row![
            tab_button("Home", Tab::Home),
            tab_button("Size", Tab::Size),
            tab_button("Profile", Tab::Profile),
        ]
        .spacing(4),
    ]
    .padding(10)
    .into()
}

fn home_view(state: &AppState) -> Element<Message> {
    let listing = state.listing.state();

    if let Some(record) = &state.selected_product {
        return product_detail_view(record);
    }

    if listing.show_full_screen_loader() {
        return container(text("Loading sneakers...")).center(Length::Fill).into();
    }

    if listing.show_full_screen_error() {
        let message = listing.error.as_deref().unwrap_or("Failed to fetch sneakers");
        return container(
            column![
                text(message).style(text::danger),
                button("Try Again").on_press(Message::Refresh).padding(10),
            ]
            .spacing(16)
            .align_x(iced::Alignment::Center),
        )
        .center(Length::Fill)
        .into();
    }

    let header = row![
        column![text("Discover Your").size(24), text("Dream Sneakers").size(24)],
        iced::widget::horizontal_space(),
        button(if listing.is_refreshing { "Refreshing..." } else { "Refresh" })
            .on_press_maybe(if listing.is_refreshing {
                None
            } else {
                Some(Message::Refresh)
            })
            .padding(8),
    ]
    .align_y(iced::Alignment::Center);

    let mut grid = Column::new().spacing(12);
    for (chunk_index, chunk) in listing.items.chunks(GRID_COLUMNS).enumerate() {
        let mut cards = row![].spacing(12);
        for (offset, record) in chunk.iter().enumerate() {
            let index = chunk_index * GRID_COLUMNS + offset;
            cards = cards.push(product_card(state, index, record));
        }
        grid = grid.push(cards);
    }

    let mut content = column![header].spacing(16);
    if let Some(error) = &listing.error {
        content = content.push(text(error).size(14).style(text::danger));
    }
    content = content.push(grid).push(listing_footer(state));

    scrollable(content).height(Length::Fill).into()
}

fn product_card<'a>(state: &'a AppState, index: usize, record: &'a ProductRecord) -> Element<'a, Message> {
    let favorite_button: Element<Message> = match &record.id {
        Some(id) => {
            let is_favorite = state.listing.is_favorite(id);
            button(if is_favorite { "♥" } else { "♡" })
                .on_press(Message::ToggleFavorite(id.clone()))
                .style(if is_favorite {
                    button::danger
                } else {
                    button::secondary
                })
                .into()
        }
        None => text("").into(),
    };

    container(
        column![
            row![
                text(record.display_brand()).size(12),
                iced::widget::horizontal_space(),
                favorite_button,
            ],
            text(record.display_name()).size(14),
            row![
                text(record.display_color()).size(12),
                iced::widget::horizontal_space(),
                text(record.formatted_price()).size(16),
            ],
            button("Details")
                .on_press(Message::ShowProduct(index))
                .padding(6),
        ]
        .spacing(6),
    )
    .padding(10)
    .width(Length::Fixed(CARD_WIDTH))
    .style(container::rounded_box)
    .into()
}

fn listing_footer(state: &AppState) -> Element<Message> {
    let listing = state.listing.state();

    if listing.show_footer_loader() {
        return text("Loading...").size(14).into();
    }

    let mut pages = row![].spacing(6);
    for page_number in 1..=listing.total_pages {
        pages = pages.push(
            button(text(page_number.to_string()))
                .on_press(Message::ChangePage(page_number))
                .style(if page_number == listing.page {
                    button::primary
                } else {
                    button::secondary
                })
                .padding(8),
        );
    }

    let mut footer = column![scrollable(pages).direction(scrollable::Direction::Horizontal(
        scrollable::Scrollbar::default(),
    ))]
    .spacing(8)
    .align_x(iced::Alignment::Center);

    if !listing.has_more() && !listing.items.is_empty() {
        footer = footer.push(
            text(format!(
                "Showing {} of {} items",
                listing.items.len(),
                listing.total_items
            ))
            .size(12),
        );
    }

    footer.into()
}

fn product_detail_view(record: &ProductRecord) -> Element<Message> {
    let mut details = column![
        button("Close").on_press(Message::CloseProduct).padding(6),
        text(record.display_brand()).size(14),
        text(record.display_name()).size(22),
        text(format!("Color: {}", record.display_color())),
    ]
    .spacing(10);

    if let Some(date) = record.release_date() {
        details = details.push(text(format!("Release Date: {}", date)));
    }
    if let Some(condition) = record.condition_label() {
        details = details.push(text(format!("Condition: {}", condition)));
    }
    if let Some(sku) = &record.sku {
        details = details.push(text(format!("SKU: {}", sku)));
    }
    details = details.push(text(record.formatted_price()).size(20));
    if let Some(story) = record.story_text() {
        details = details.push(text("Story").size(16)).push(text(story).size(14));
    }
    details = details.push(
        button("Buy Now")
            .on_press(Message::BuyNow)
            .padding(12)
            .width(Length::Fill),
    );

    scrollable(details).height(Length::Fill).into()
}

fn size_view(guide: &SizeGuideState) -> Element<Message> {
    let controls = row![
        pick_list(Fit::all(), Some(guide.fit), Message::FitSelected),
        pick_list(SizeSystem::all(), Some(guide.system), Message::SystemSelected),
    ]
    .spacing(10);

    let mut sizes = Column::new().spacing(6);
    for size in size_guide::sizes(guide.fit, guide.system) {
        let selected = guide.selected_size == Some(*size);
        let mut entry = column![
            button(text(*size))
                .on_press(Message::SizeSelected(*size))
                .style(if selected {
                    button::primary
                } else {
                    button::secondary
                })
                .width(Length::Fill),
        ];
        if selected {
            if let Some(conversions) = size_guide::convert(guide.fit, guide.system, size) {
                for (system, value) in conversions {
                    entry = entry.push(text(format!("{}: {}", system, value)).size(13));
                }
            }
        }
        sizes = sizes.push(entry);
    }

    column![
        text("Size Guide").size(24),
        text(guide.fit.title()).size(16),
        controls,
        scrollable(sizes).height(Length::Fill),
    ]
    .spacing(12)
    .into()
}

fn profile_view(state: &AppState) -> Element<Message> {
    let mut menu = Column::new().spacing(8);
    for item in profile_menu() {
        let entry = column![text(item.title).size(15), text(item.subtitle).size(12)];
        let entry: Element<Message> = match item.link {
            Some(link) => button(entry)
                .on_press(Message::OpenLink(link))
                .style(button::text)
                .padding(0)
                .width(Length::Fill)
                .into(),
            None => entry.into(),
        };
        menu = menu.push(container(entry).padding(8).width(Length::Fill).style(container::rounded_box));
    }

    let signed_in = state
        .session
        .as_ref()
        .map(|session| format!("Signed in as {}", session.email))
        .unwrap_or_default();

    let mut content = column![
        text(APP_INFO.developer).size(24),
        text(signed_in).size(13),
        text(format!("Favorites: {}", state.listing.favorites().len())).size(13),
    ]
    .spacing(10);
    if let Some(error) = &state.link_error {
        content = content.push(text(error).size(13).style(text::danger));
    }
    content.push(scrollable(menu).height(Length::Fill)).into()
}

fn payment_view(payment: &PaymentState) -> Element<Message> {
    let order = payment.session.order();

    if let Some(instruction) = &payment.instruction {
        return container(
            column![
                text(instruction.title()).size(22),
                text(instruction.message()),
                button("Done").on_press(Message::PaymentDone).padding(10),
            ]
            .spacing(16)
            .max_width(360.0),
        )
        .center(Length::Fill)
        .into();
    }

    let mut methods = Column::new().spacing(10);
    for method in PaymentMethod::all() {
        methods = methods.push(column![
            radio(
                method.name(),
                method,
                payment.session.selected(),
                Message::PaymentMethodSelected,
            ),
            text(method.description()).size(12),
        ]);
    }

    let mut content = column![
        button("Back").on_press(Message::BackFromPayment).padding(6),
        text("Payment").size(24),
        container(
            column![
                text(&order.brand).size(12),
                text(&order.name).size(16),
                text(format!("Price {}", order.formatted_price())),
            ]
            .spacing(4),
        )
        .padding(10)
        .width(Length::Fill)
        .style(container::rounded_box),
        text("Select Payment Method").size(16),
        methods,
    ]
    .spacing(12);

    if let Some(error) = &payment.error {
        content = content.push(text(error).style(text::danger));
    }

    content = content.push(
        row![
            column![text("Total").size(12), text(order.formatted_price()).size(20)],
            iced::widget::horizontal_space(),
            button("Pay Now")
                .on_press_maybe(if payment.session.can_pay() {
                    Some(Message::Pay)
                } else {
                    None
                })
                .padding(12),
        ]
        .align_y(iced::Alignment::Center),
    );

    scrollable(content).height(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sneakers_core::{StaticCatalog, StoreConfig};

    fn state() -> AppState {
        let store = Storefront::with_source(
            StoreConfig::default(),
            Arc::new(StaticCatalog::numbered(25)),
        )
        .unwrap();
        AppState::new(store)
    }

    #[test]
    fn test_skip_splash_goes_to_login() {
        let mut state = state();
        state.splash = Some(state.store.splash_transition());
        let _ = update(&mut state, Message::SkipSplash);
        assert_eq!(state.screen, Screen::Login);
        assert!(state.splash.is_none());

        // A late cancellation notice must not move the user again.
        let _ = update(&mut state, Message::SplashElapsed(DelayOutcome::Cancelled));
        assert_eq!(state.screen, Screen::Login);
    }

    #[test]
    fn test_empty_login_reports_missing_fields() {
        let mut state = state();
        state.screen = Screen::Login;
        let _ = update(&mut state, Message::LoginPressed);
        assert_eq!(state.login.error.as_deref(), Some("Please fill in all fields"));
        assert!(!state.login.is_loading);
    }

    fn pending_login(state: &mut AppState) {
        state.screen = Screen::Login;
        let _ = update(state, Message::EmailChanged("kiki@gmail.com".to_string()));
        let _ = update(state, Message::PasswordChanged("kikipoiu".to_string()));
        let _ = update(state, Message::LoginPressed);
        assert!(state.login.is_loading);
        assert!(state.login.transition.is_some());
    }

    #[tokio::test]
    async fn test_cancel_login_stops_pending_sign_in() {
        let mut state = state();
        pending_login(&mut state);

        let _ = update(&mut state, Message::CancelLogin);
        let pending = state.login.transition.as_ref().unwrap().wait();
        assert_eq!(pending.await, DelayOutcome::Cancelled);

        let _ = update(&mut state, Message::LoginDelayElapsed(DelayOutcome::Cancelled));
        assert!(!state.login.is_loading);
        assert!(state.login.transition.is_none());
        assert_eq!(state.screen, Screen::Login);

        // The form is usable again.
        let _ = update(&mut state, Message::LoginPressed);
        assert!(state.login.is_loading);
    }

    #[test]
    fn test_cancel_login_wins_over_late_fire() {
        let mut state = state();
        pending_login(&mut state);

        let _ = update(&mut state, Message::CancelLogin);
        let _ = update(&mut state, Message::LoginDelayElapsed(DelayOutcome::Fired));
        assert!(!state.login.is_loading);
        assert!(state.login.transition.is_none());
        assert!(state.session.is_none());
    }

    #[test]
    fn test_profile_links_open() {
        let mut state = state();
        state.screen = Screen::Main;
        state.tab = Tab::Profile;

        let linked: Vec<_> = profile_menu().iter().filter_map(|item| item.link).collect();
        assert!(linked.contains(&APP_INFO.developer_link));
        assert!(linked.contains(&APP_INFO.website_link));

        let _ = update(&mut state, Message::OpenLink(APP_INFO.website_link));
        assert_eq!(state.screen, Screen::Main);
        assert_eq!(state.tab, Tab::Profile);

        let _ = update(
            &mut state,
            Message::LinkOpened(Err("Could not open https://sneakersstore.com".to_string())),
        );
        assert!(state.link_error.is_some());

        let _ = update(&mut state, Message::LinkOpened(Ok(())));
        assert!(state.link_error.is_none());
    }

    #[test]
    fn test_stale_page_result_ignored() {
        let mut state = state();
        let older = state.listing.begin_change_page(PageRequest::new(2).unwrap());
        let newer = state.listing.begin_change_page(PageRequest::new(3).unwrap());

        let page3 = sneakers_core::paginate(&(0..25).collect::<Vec<u32>>(), newer.page(), 10);
        let records = |n: usize| -> Vec<ProductRecord> {
            (0..n).map(|_| ProductRecord::default()).collect()
        };
        let newer_result = Ok(PageResult {
            items: records(page3.items.len()),
            total_items: page3.total_items,
            total_pages: page3.total_pages,
            current_page: page3.current_page,
        });
        let older_result = Ok(PageResult {
            items: records(10),
            total_items: 25,
            total_pages: 3,
            current_page: 2,
        });

        let _ = update(&mut state, Message::PageLoaded(newer, newer_result));
        let _ = update(&mut state, Message::PageLoaded(older, older_result));
        assert_eq!(state.listing.state().page, 3);
        assert_eq!(state.listing.state().items.len(), 5);
    }

    #[test]
    fn test_buy_now_opens_payment() {
        let mut state = state();
        state.screen = Screen::Main;
        state.selected_product = Some(ProductRecord {
            name: Some("Runner".to_string()),
            retail_price_cents: Some(12345.0),
            ..Default::default()
        });

        let _ = update(&mut state, Message::BuyNow);
        assert_eq!(state.screen, Screen::Payment);

        let _ = update(&mut state, Message::Pay);
        let payment = state.payment.as_ref().unwrap();
        assert_eq!(payment.error.as_deref(), Some("Please select a payment method"));

        let _ = update(&mut state, Message::PaymentMethodSelected(PaymentMethod::Qris));
        let _ = update(&mut state, Message::Pay);
        let payment = state.payment.as_ref().unwrap();
        assert_eq!(
            payment.instruction,
            Some(PaymentInstruction::Qris { amount: 123.45 })
        );

        let _ = update(&mut state, Message::PaymentDone);
        assert_eq!(state.screen, Screen::Main);
        assert!(state.payment.is_none());
    }
}
