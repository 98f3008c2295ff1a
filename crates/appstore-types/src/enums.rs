//! Enumerated values of the App Store Server API and notifications

use crate::macros::{int_enum, string_enum};

// ============================================================================
// String values
// ============================================================================

string_enum! {
    /// The server environment, either sandbox or production
    pub enum Environment {
        Sandbox = "Sandbox",
        Production = "Production",
        Xcode = "Xcode",
        LocalTesting = "LocalTesting",
    }
}

string_enum! {
    /// The type of an App Store Server Notification
    pub enum NotificationType {
        /// The App Store requests consumption data for a refund request
        ConsumptionRequest = "CONSUMPTION_REQUEST",
        /// The customer changed their subscription plan
        DidChangeRenewalPref = "DID_CHANGE_RENEWAL_PREF",
        /// The customer changed the subscription renewal status
        DidChangeRenewalStatus = "DID_CHANGE_RENEWAL_STATUS",
        /// The subscription failed to renew due to a billing issue
        DidFailToRenew = "DID_FAIL_TO_RENEW",
        DidRenew = "DID_RENEW",
        Expired = "EXPIRED",
        /// Apple created an external purchase token without a report
        ExternalPurchaseToken = "EXTERNAL_PURCHASE_TOKEN",
        GracePeriodExpired = "GRACE_PERIOD_EXPIRED",
        OfferRedeemed = "OFFER_REDEEMED",
        /// A consumable, non-consumable or non-renewing subscription purchase
        OneTimeCharge = "ONE_TIME_CHARGE",
        PriceIncrease = "PRICE_INCREASE",
        Refund = "REFUND",
        RefundDeclined = "REFUND_DECLINED",
        RefundReversed = "REFUND_REVERSED",
        RenewalExtended = "RENEWAL_EXTENDED",
        /// Progress of a renewal date extension for all active subscribers
        RenewalExtension = "RENEWAL_EXTENSION",
        /// A Family Sharing entitlement is no longer available
        Revoke = "REVOKE",
        Subscribed = "SUBSCRIBED",
        /// Sent on request through the test notification endpoint
        Test = "TEST",
    }
}

string_enum! {
    /// Additional detail for a notification type
    pub enum Subtype {
        Accepted = "ACCEPTED",
        AutoRenewDisabled = "AUTO_RENEW_DISABLED",
        AutoRenewEnabled = "AUTO_RENEW_ENABLED",
        BillingRecovery = "BILLING_RECOVERY",
        BillingRetry = "BILLING_RETRY",
        Downgrade = "DOWNGRADE",
        Failure = "FAILURE",
        GracePeriod = "GRACE_PERIOD",
        InitialBuy = "INITIAL_BUY",
        Pending = "PENDING",
        PriceIncrease = "PRICE_INCREASE",
        ProductNotForSale = "PRODUCT_NOT_FOR_SALE",
        Resubscribe = "RESUBSCRIBE",
        Summary = "SUMMARY",
        Unreported = "UNREPORTED",
        Upgrade = "UPGRADE",
        Voluntary = "VOLUNTARY",
    }
}

string_enum! {
    /// Whether the customer purchased the item or has it through Family Sharing
    pub enum InAppOwnershipType {
        FamilyShared = "FAMILY_SHARED",
        Purchased = "PURCHASED",
    }
}

string_enum! {
    /// The type of the in-app purchase in a transaction
    pub enum TransactionType {
        AutoRenewableSubscription = "Auto-Renewable Subscription",
        NonConsumable = "Non-Consumable",
        Consumable = "Consumable",
        NonRenewingSubscription = "Non-Renewing Subscription",
    }
}

string_enum! {
    /// Product type filter of the transaction history request
    pub enum ProductType {
        AutoRenewable = "AUTO_RENEWABLE",
        NonRenewable = "NON_RENEWABLE",
        Consumable = "CONSUMABLE",
        NonConsumable = "NON_CONSUMABLE",
    }
}

string_enum! {
    /// Sort order of the transaction history
    pub enum Order {
        Ascending = "ASCENDING",
        Descending = "DESCENDING",
    }
}

string_enum! {
    /// Payment mode of a subscription offer
    pub enum OfferDiscountType {
        FreeTrial = "FREE_TRIAL",
        PayAsYouGo = "PAY_AS_YOU_GO",
        PayUpFront = "PAY_UP_FRONT",
    }
}

string_enum! {
    /// Whether a transaction is a customer purchase or a system renewal
    pub enum TransactionReason {
        Purchase = "PURCHASE",
        Renewal = "RENEWAL",
    }
}

string_enum! {
    /// The customer-provided reason for a refund request
    pub enum ConsumptionRequestReason {
        UnintendedPurchase = "UNINTENDED_PURCHASE",
        FulfillmentIssue = "FULFILLMENT_ISSUE",
        UnsatisfiedWithPurchase = "UNSATISFIED_WITH_PURCHASE",
        Legal = "LEGAL",
        Other = "OTHER",
    }
}

string_enum! {
    /// Outcome of one attempt to deliver a notification to your server
    pub enum SendAttemptResult {
        Success = "SUCCESS",
        TimedOut = "TIMED_OUT",
        TlsIssue = "TLS_ISSUE",
        CircularRedirect = "CIRCULAR_REDIRECT",
        NoResponse = "NO_RESPONSE",
        SocketIssue = "SOCKET_ISSUE",
        UnsupportedCharset = "UNSUPPORTED_CHARSET",
        InvalidResponse = "INVALID_RESPONSE",
        PrematureClose = "PREMATURE_CLOSE",
        UnsuccessfulHttpResponseCode = "UNSUCCESSFUL_HTTP_RESPONSE_CODE",
        Other = "OTHER",
    }
}

// ============================================================================
// Integer values
// ============================================================================

int_enum! {
    /// Status of an auto-renewable subscription
    pub enum Status {
        Active = 1,
        Expired = 2,
        BillingRetryPeriod = 3,
        BillingGracePeriod = 4,
        Revoked = 5,
    }
}

int_enum! {
    /// The type of a subscription offer
    pub enum OfferType {
        Introductory = 1,
        Promotional = 2,
        SubscriptionOfferCode = 3,
        WinBack = 4,
    }
}

int_enum! {
    /// Why the App Store refunded or revoked a transaction
    pub enum RevocationReason {
        /// Refunded for other reasons, such as an accidental purchase
        Other = 0,
        /// Refunded due to an actual or perceived issue within the app
        AppIssue = 1,
    }
}

int_enum! {
    pub enum AutoRenewStatus {
        Off = 0,
        On = 1,
    }
}

int_enum! {
    /// Why an auto-renewable subscription expired
    pub enum ExpirationIntent {
        CustomerCancelled = 1,
        BillingError = 2,
        CustomerDidNotConsentToPriceIncrease = 3,
        ProductNotAvailable = 4,
        Other = 5,
    }
}

int_enum! {
    pub enum PriceIncreaseStatus {
        CustomerHasNotResponded = 0,
        CustomerConsentedOrWasNotified = 1,
    }
}

int_enum! {
    /// Whether a looked up order ID is valid for the app
    pub enum OrderLookupStatus {
        Valid = 0,
        Invalid = 1,
    }
}

// ============================================================================
// Consumption information values
// ============================================================================

int_enum! {
    /// Age of the customer's account
    pub enum AccountTenure {
        Undeclared = 0,
        ZeroToThreeDays = 1,
        ThreeDaysToTenDays = 2,
        TenDaysToThirtyDays = 3,
        ThirtyDaysToNinetyDays = 4,
        NinetyDaysToOneHundredEightyDays = 5,
        OneHundredEightyDaysToThreeHundredSixtyFiveDays = 6,
        GreaterThanThreeHundredSixtyFiveDays = 7,
    }
}

int_enum! {
    /// Extent to which the customer consumed the in-app purchase
    pub enum ConsumptionStatus {
        Undeclared = 0,
        NotConsumed = 1,
        PartiallyConsumed = 2,
        FullyConsumed = 3,
    }
}

int_enum! {
    /// Whether the app delivered a working in-app purchase
    pub enum DeliveryStatus {
        DeliveredAndWorkingProperly = 0,
        DidNotDeliverDueToQualityIssue = 1,
        DeliveredWrongItem = 2,
        DidNotDeliverDueToServerOutage = 3,
        DidNotDeliverDueToInGameCurrencyChange = 4,
        DidNotDeliverForOtherReason = 5,
    }
}

int_enum! {
    /// Lifetime purchase or refund amount in USD, across all platforms
    pub enum LifetimeDollars {
        Undeclared = 0,
        ZeroUsd = 1,
        OneCentToFortyNineDollarsAndNinetyNineCents = 2,
        FiftyDollarsToNinetyNineDollarsAndNinetyNineCents = 3,
        OneHundredDollarsToFourHundredNinetyNineDollarsAndNinetyNineCents = 4,
        FiveHundredDollarsToNineHundredNinetyNineDollarsAndNinetyNineCents = 5,
        OneThousandDollarsToOneThousandNineHundredNinetyNineDollarsAndNinetyNineCents = 6,
        TwoThousandDollarsOrGreater = 7,
    }
}

int_enum! {
    /// Platform on which the customer consumed the in-app purchase
    pub enum Platform {
        Undeclared = 0,
        Apple = 1,
        NonApple = 2,
    }
}

int_enum! {
    /// Time the customer used the app
    pub enum PlayTime {
        Undeclared = 0,
        ZeroToFiveMinutes = 1,
        FiveToSixtyMinutes = 2,
        OneToSixHours = 3,
        SixHoursToTwentyFourHours = 4,
        OneDayToFourDays = 5,
        FourDaysToSixteenDays = 6,
        OverSixteenDays = 7,
    }
}

int_enum! {
    /// Your preferred outcome for a refund request
    pub enum RefundPreference {
        Undeclared = 0,
        PreferGrant = 1,
        PreferDecline = 2,
        NoPreference = 3,
    }
}

int_enum! {
    /// Status of the customer's account within the app
    pub enum UserStatus {
        Undeclared = 0,
        Active = 1,
        Suspended = 2,
        Terminated = 3,
        LimitedAccess = 4,
    }
}

int_enum! {
    /// Reason for a subscription renewal date extension
    pub enum ExtendReasonCode {
        Undeclared = 0,
        CustomerSatisfaction = 1,
        Other = 2,
        ServiceIssueOrOutage = 3,
    }
}
