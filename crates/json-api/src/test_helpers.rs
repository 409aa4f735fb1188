//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, Zoned, civil::date, tz::TimeZone};
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use canteen_app::{
    auth::{MockAuthService, Principal, Role},
    context::AppContext,
    domain::{
        checkout::{
            MockCheckoutService,
            models::{CheckoutItem, CheckoutRequest},
        },
        feedback::MockFeedbackService,
        notifications::LogDispatcher,
        orders::{
            MockOrderLedger,
            models::{DraftOrder, Order, OrderStatus, PaymentMethod, PaymentRecord},
        },
    },
    ids::{CustomerUuid, OrderUuid, ProductUuid},
};
use canteen_core::{discounts, pricing};

use crate::{extensions::*, state::State};

pub(crate) const TEST_CUSTOMER: CustomerUuid = CustomerUuid::from_uuid(Uuid::nil());

/// Tuesday 2026-08-18 09:00 UTC, inside the happy-hour window.
#[expect(clippy::expect_used, reason = "fixed test datetime is always valid")]
pub(crate) fn fixed_now() -> Zoned {
    date(2026, 8, 18)
        .at(9, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .expect("fixed test datetime is valid")
}

#[salvo::handler]
pub(crate) async fn inject_customer(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_principal(Principal {
        customer: TEST_CUSTOMER,
        role: Role::Customer,
    });
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
pub(crate) async fn inject_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_principal(Principal {
        customer: TEST_CUSTOMER,
        role: Role::Admin,
    });
    ctrl.call_next(req, depot, res).await;
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_checkout_mock() -> MockCheckoutService {
    let mut checkout = MockCheckoutService::new();

    checkout.expect_draft_order().never();
    checkout.expect_place_cash_order().never();
    checkout.expect_process_payment().never();

    checkout
}

fn strict_ledger_mock() -> MockOrderLedger {
    let mut ledger = MockOrderLedger::new();

    ledger.expect_create_cash().never();
    ledger.expect_create_paid().never();
    ledger.expect_get_order().never();
    ledger.expect_list_orders().never();
    ledger.expect_get_any_order().never();
    ledger.expect_set_status().never();

    ledger
}

fn strict_feedback_mock() -> MockFeedbackService {
    let mut feedback = MockFeedbackService::new();

    feedback.expect_submit().never();

    feedback
}

fn app_context(
    checkout: MockCheckoutService,
    ledger: MockOrderLedger,
    feedback: MockFeedbackService,
    auth: MockAuthService,
) -> AppContext {
    AppContext {
        checkout: Arc::new(checkout),
        orders: Arc::new(ledger),
        feedback: Arc::new(feedback),
        notifications: Arc::new(LogDispatcher),
        auth: Arc::new(auth),
    }
}

pub(crate) fn state_with_checkout(checkout: MockCheckoutService) -> Arc<State> {
    State::from_app_context(app_context(
        checkout,
        strict_ledger_mock(),
        strict_feedback_mock(),
        strict_auth_mock(),
    ))
}

pub(crate) fn state_with_ledger(ledger: MockOrderLedger) -> Arc<State> {
    State::from_app_context(app_context(
        strict_checkout_mock(),
        ledger,
        strict_feedback_mock(),
        strict_auth_mock(),
    ))
}

pub(crate) fn state_with_feedback(feedback: MockFeedbackService) -> Arc<State> {
    State::from_app_context(app_context(
        strict_checkout_mock(),
        strict_ledger_mock(),
        feedback,
        strict_auth_mock(),
    ))
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    State::from_app_context(app_context(
        strict_checkout_mock(),
        strict_ledger_mock(),
        strict_feedback_mock(),
        auth,
    ))
}

pub(crate) fn checkout_service(checkout: MockCheckoutService, route: Router) -> Service {
    customer_service(state_with_checkout(checkout), route)
}

pub(crate) fn ledger_service(ledger: MockOrderLedger, route: Router) -> Service {
    customer_service(state_with_ledger(ledger), route)
}

pub(crate) fn feedback_route_service(feedback: MockFeedbackService, route: Router) -> Service {
    customer_service(state_with_feedback(feedback), route)
}

pub(crate) fn admin_ledger_service(ledger: MockOrderLedger, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_ledger(ledger)))
            .hoop(inject_admin)
            .push(route),
    )
}

fn customer_service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_customer)
            .push(route),
    )
}

/// One 200-rupee filter coffee, the reference cart.
pub(crate) fn coffee_item() -> CheckoutItem {
    CheckoutItem {
        product: ProductUuid::new(),
        name: "Filter Coffee".into(),
        category: "Coffee".into(),
        unit_price: Decimal::from(200),
        quantity: 1,
        image_ref: None,
    }
}

pub(crate) fn checkout_request(payment_method: PaymentMethod) -> CheckoutRequest {
    CheckoutRequest {
        items: vec![coffee_item()],
        address: "12 Canteen Lane".into(),
        phone: "9876543210".into(),
        coupon: None,
        payment_method,
    }
}

/// The reference cart priced during happy hour.
pub(crate) fn priced_draft(payment_method: PaymentMethod) -> DraftOrder {
    let item = coffee_item();
    let cart = vec![item.as_cart_item()];

    let applied = discounts::applicable_discounts(&cart, fixed_now().datetime(), None);
    let priced = pricing::price_cart(&cart, &applied);

    DraftOrder {
        items: vec![item.to_order_item()],
        address: "12 Canteen Lane".into(),
        phone: "9876543210".into(),
        discounts: applied,
        pricing: priced,
        payment_method,
    }
}

pub(crate) fn persisted_order(
    payment_method: PaymentMethod,
    status: OrderStatus,
    transaction_id: Option<String>,
) -> Order {
    let draft = priced_draft(payment_method);

    Order {
        id: OrderUuid::new(),
        owner: TEST_CUSTOMER,
        items: draft.items,
        address: draft.address,
        phone: draft.phone,
        subtotal: draft.pricing.subtotal,
        discount_total: draft.pricing.discount_total,
        tax_amount: draft.pricing.gst,
        total: draft.pricing.total,
        discounts: draft.discounts,
        payment: PaymentRecord {
            method: payment_method,
            authorized: transaction_id.is_some(),
            transaction_id,
            amount: draft.pricing.total,
        },
        status,
        created_at: Timestamp::UNIX_EPOCH,
    }
}
