//! Method catalog — the Planyo API methods this SDK knows by name.
//!
//! The list is data. The dispatcher never consults it, so methods the
//! provider adds later can still be called through
//! [`PlanyoClient::invoke`](crate::client::PlanyoClient::invoke). The catalog
//! gives callers typed names ([`Method`]) and a named-method façade:
//!
//! ```rust,ignore
//! client.site().api_test().send().await?;
//! client.reservations().list_reservations().param("start_time", ts).send().await?;
//! ```

mod macros;

use std::str::FromStr;

use crate::error::SdkError;
use macros::method_catalog;

method_catalog! {
    /// Site-wide information and diagnostics.
    Site => site: SiteMethods {
        api_test => ApiTest,
        get_site_info => GetSiteInfo,
        list_sites => ListSites,
        list_translations => ListTranslations,
        get_form_items => GetFormItems,
        set_custom_property => SetCustomProperty,
    },

    /// Resources, usage, pricing and event times.
    Resources => resources: ResourceMethods {
        list_resources => ListResources,
        get_resource_info => GetResourceInfo,
        add_resource => AddResource,
        modify_resource => ModifyResource,
        remove_resource => RemoveResource,
        resource_search => ResourceSearch,
        get_resource_usage => GetResourceUsage,
        get_rental_price => GetRentalPrice,
        get_event_times => GetEventTimes,
    },

    /// Reservation lifecycle.
    Reservations => reservations: ReservationMethods {
        make_reservation => MakeReservation,
        can_make_reservation => CanMakeReservation,
        get_reservation_data => GetReservationData,
        list_reservations => ListReservations,
        modify_reservation => ModifyReservation,
        do_reservation_action => DoReservationAction,
        set_reservation_color => SetReservationColor,
    },

    /// Customer accounts.
    Users => users: UserMethods {
        add_user => AddUser,
        get_user_data => GetUserData,
        list_users => ListUsers,
        modify_user => ModifyUser,
    },

    /// Discount vouchers.
    Vouchers => vouchers: VoucherMethods {
        list_vouchers => ListVouchers,
    },

    /// Payments and invoice items.
    Payments => payments: PaymentMethods {
        add_reservation_payment => AddReservationPayment,
        get_invoice_items => GetInvoiceItems,
    },

    /// Notification callbacks.
    Notifications => notifications: NotificationMethods {
        add_notification_callback => AddNotificationCallback,
        remove_notification_callback => RemoveNotificationCallback,
    },
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Method {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::lookup(s).ok_or_else(|| SdkError::UnsupportedMethod(s.to_string()))
    }
}

impl AsRef<str> for Method {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
