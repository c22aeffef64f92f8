//! HTTP response status classification.
//!
//! A raw status code is classified exactly once, at construction, into
//! [`ResponseStatus`]: one of five closed categories or the
//! [`ResponseStatus::Undefined`] fallback. Each category is a fully
//! enumerable set of named values — a code inside a category's numeric
//! bounds that is not one of its named values still classifies as
//! undefined.
//!
//! Equality is structural over the resolved code: a classified value, a
//! raw integer, and a named sub-category value all compare equal when
//! their codes match.
//!
//! ```
//! use wireform::{ClientError, ResponseStatus};
//!
//! let status = ResponseStatus::from_code(404);
//! assert_eq!(status, 404);
//! assert_eq!(status, ClientError::NotFound);
//! assert!(status.error().is_some());
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;

use derive_more::{Display, Error, From};

/// Informational responses (100–199).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[repr(u16)]
pub enum Informational {
    /// 100: the client should continue the request.
    #[display("Continue")]
    Continue = 100,
    /// 101: the server is switching to the protocol named in the
    /// `Upgrade` request header.
    #[display("Switching Protocols")]
    SwitchingProtocols = 101,
    /// 102: received and being processed, no response available yet.
    #[display("Processing")]
    Processing = 102,
    /// 103: early hints, lets the user agent preload resources.
    #[display("Early Hints")]
    EarlyHints = 103,
}

impl Informational {
    /// Numeric bounds of the informational class.
    pub const RANGE: Range<u16> = 100..200;

    /// Look up the named value for `code`, if the class enumerates it.
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            100 => Some(Self::Continue),
            101 => Some(Self::SwitchingProtocols),
            102 => Some(Self::Processing),
            103 => Some(Self::EarlyHints),
            _ => None,
        }
    }

    /// The numeric status code.
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }
}

/// Successful responses (200–299).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[repr(u16)]
pub enum Successful {
    /// 200: the request succeeded.
    #[display("OK")]
    Ok = 200,
    /// 201: a new resource was created.
    #[display("Created")]
    Created = 201,
    /// 202: received but not yet acted upon.
    #[display("Accepted")]
    Accepted = 202,
    /// 203: metadata collected from a local or third-party copy.
    #[display("Non-Authoritative Information")]
    NonAuthoritativeInformation = 203,
    /// 204: no content to send, headers may be useful.
    #[display("No Content")]
    NoContent = 204,
    /// 205: tells the user agent to reset the document.
    #[display("Reset Content")]
    ResetContent = 205,
    /// 206: partial body, answering a `Range` request.
    #[display("Partial Content")]
    PartialContent = 206,
    /// 207: multiple resources, multiple status codes (WebDAV).
    #[display("Multi-Status")]
    MultiStatus = 207,
    /// 208: members of a binding already reported (WebDAV).
    #[display("Already Reported")]
    AlreadyReported = 208,
    /// 226: instance-manipulation result (delta encoding).
    #[display("IM Used")]
    ImUsed = 226,
}

impl Successful {
    /// Numeric bounds of the successful class.
    pub const RANGE: Range<u16> = 200..300;

    /// Look up the named value for `code`, if the class enumerates it.
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            200 => Some(Self::Ok),
            201 => Some(Self::Created),
            202 => Some(Self::Accepted),
            203 => Some(Self::NonAuthoritativeInformation),
            204 => Some(Self::NoContent),
            205 => Some(Self::ResetContent),
            206 => Some(Self::PartialContent),
            207 => Some(Self::MultiStatus),
            208 => Some(Self::AlreadyReported),
            226 => Some(Self::ImUsed),
            _ => None,
        }
    }

    /// The numeric status code.
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }
}

/// Redirection messages (300–399).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[repr(u16)]
pub enum Redirection {
    /// 300: more than one possible response.
    #[display("Multiple Choices")]
    MultipleChoices = 300,
    /// 301: moved permanently to the URL in the response.
    #[display("Moved Permanently")]
    MovedPermanently = 301,
    /// 302: temporarily at a different URI.
    #[display("Found")]
    Found = 302,
    /// 303: fetch the resource at another URI with GET.
    #[display("See Other")]
    SeeOther = 303,
    /// 304: not modified, keep the cached version.
    #[display("Not Modified")]
    NotModified = 304,
    /// 305: deprecated proxy indirection.
    #[display("Use Proxy")]
    UseProxy = 305,
    /// 306: reserved, no longer used.
    #[display("Unused")]
    Unused = 306,
    /// 307: temporary redirect, method must not change.
    #[display("Temporary Redirect")]
    TemporaryRedirect = 307,
    /// 308: permanent redirect, method must not change.
    #[display("Permanent Redirect")]
    PermanentRedirect = 308,
}

impl Redirection {
    /// Numeric bounds of the redirection class.
    pub const RANGE: Range<u16> = 300..400;

    /// Look up the named value for `code`, if the class enumerates it.
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            300 => Some(Self::MultipleChoices),
            301 => Some(Self::MovedPermanently),
            302 => Some(Self::Found),
            303 => Some(Self::SeeOther),
            304 => Some(Self::NotModified),
            305 => Some(Self::UseProxy),
            306 => Some(Self::Unused),
            307 => Some(Self::TemporaryRedirect),
            308 => Some(Self::PermanentRedirect),
            _ => None,
        }
    }

    /// The numeric status code.
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }
}

/// Client error responses (400–499).
///
/// A classified client error is itself usable as an error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
#[repr(u16)]
pub enum ClientError {
    /// 400: the server cannot process the request.
    #[display("Bad Request")]
    BadRequest = 400,
    /// 401: authentication required.
    #[display("Unauthorized")]
    Unauthorized = 401,
    /// 402: reserved for future use.
    #[display("Payment Required")]
    PaymentRequired = 402,
    /// 403: the client's identity is known but access is refused.
    #[display("Forbidden")]
    Forbidden = 403,
    /// 404: the server cannot find the requested resource.
    #[display("Not Found")]
    NotFound = 404,
    /// 405: the method is known but not supported by the target.
    #[display("Method Not Allowed")]
    MethodNotAllowed = 405,
    /// 406: no content satisfying the request's content negotiation.
    #[display("Not Acceptable")]
    NotAcceptable = 406,
    /// 407: authentication by a proxy is required.
    #[display("Proxy Authentication Required")]
    ProxyAuthenticationRequired = 407,
    /// 408: the server timed out waiting on an idle connection.
    #[display("Request Timeout")]
    RequestTimeout = 408,
    /// 409: conflict with the current state of the resource.
    #[display("Conflict")]
    Conflict = 409,
    /// 410: permanently deleted, no forwarding address.
    #[display("Gone")]
    Gone = 410,
    /// 411: `Content-Length` header required.
    #[display("Length Required")]
    LengthRequired = 411,
    /// 412: request preconditions not met.
    #[display("Precondition Failed")]
    PreconditionFailed = 412,
    /// 413: request entity larger than the server's limits.
    #[display("Payload Too Large")]
    PayloadTooLarge = 413,
    /// 414: the requested URI is too long.
    #[display("URI Too Long")]
    UriTooLong = 414,
    /// 415: media format not supported.
    #[display("Unsupported Media Type")]
    UnsupportedMediaType = 415,
    /// 416: the `Range` cannot be satisfied.
    #[display("Range Not Satisfiable")]
    RangeNotSatisfiable = 416,
    /// 417: the `Expect` expectation cannot be met.
    #[display("Expectation Failed")]
    ExpectationFailed = 417,
    /// 418: the server refuses to brew coffee with a teapot.
    #[display("I'm a teapot")]
    ImATeapot = 418,
    /// 421: request directed at a server unable to respond.
    #[display("Misdirected Request")]
    MisdirectedRequest = 421,
    /// 422: well-formed but semantically erroneous (WebDAV).
    #[display("Unprocessable Content")]
    UnprocessableContent = 422,
    /// 423: the resource is locked (WebDAV).
    #[display("Locked")]
    Locked = 423,
    /// 424: a depended-upon request failed (WebDAV).
    #[display("Failed Dependency")]
    FailedDependency = 424,
    /// 425: unwilling to risk processing a replayable request.
    #[display("Too Early")]
    TooEarly = 425,
    /// 426: upgrade to the protocol in the `Upgrade` header required.
    #[display("Upgrade Required")]
    UpgradeRequired = 426,
    /// 428: the request must be conditional.
    #[display("Precondition Required")]
    PreconditionRequired = 428,
    /// 429: rate limited.
    #[display("Too Many Requests")]
    TooManyRequests = 429,
    /// 431: header fields too large.
    #[display("Request Header Fields Too Large")]
    RequestHeaderFieldsTooLarge = 431,
    /// 451: unavailable for legal reasons.
    #[display("Unavailable For Legal Reasons")]
    UnavailableForLegalReasons = 451,
}

impl ClientError {
    /// Numeric bounds of the client error class.
    pub const RANGE: Range<u16> = 400..500;

    /// Look up the named value for `code`, if the class enumerates it.
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            400 => Some(Self::BadRequest),
            401 => Some(Self::Unauthorized),
            402 => Some(Self::PaymentRequired),
            403 => Some(Self::Forbidden),
            404 => Some(Self::NotFound),
            405 => Some(Self::MethodNotAllowed),
            406 => Some(Self::NotAcceptable),
            407 => Some(Self::ProxyAuthenticationRequired),
            408 => Some(Self::RequestTimeout),
            409 => Some(Self::Conflict),
            410 => Some(Self::Gone),
            411 => Some(Self::LengthRequired),
            412 => Some(Self::PreconditionFailed),
            413 => Some(Self::PayloadTooLarge),
            414 => Some(Self::UriTooLong),
            415 => Some(Self::UnsupportedMediaType),
            416 => Some(Self::RangeNotSatisfiable),
            417 => Some(Self::ExpectationFailed),
            418 => Some(Self::ImATeapot),
            421 => Some(Self::MisdirectedRequest),
            422 => Some(Self::UnprocessableContent),
            423 => Some(Self::Locked),
            424 => Some(Self::FailedDependency),
            425 => Some(Self::TooEarly),
            426 => Some(Self::UpgradeRequired),
            428 => Some(Self::PreconditionRequired),
            429 => Some(Self::TooManyRequests),
            431 => Some(Self::RequestHeaderFieldsTooLarge),
            451 => Some(Self::UnavailableForLegalReasons),
            _ => None,
        }
    }

    /// The numeric status code.
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }
}

/// Server error responses (500–599).
///
/// A classified server error is itself usable as an error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
#[repr(u16)]
pub enum ServerError {
    /// 500: the server hit an unexpected condition.
    #[display("Internal Server Error")]
    InternalServerError = 500,
    /// 501: request method not supported by the server.
    #[display("Not Implemented")]
    NotImplemented = 501,
    /// 502: invalid response from the upstream server.
    #[display("Bad Gateway")]
    BadGateway = 502,
    /// 503: not ready to handle the request.
    #[display("Service Unavailable")]
    ServiceUnavailable = 503,
    /// 504: upstream response did not arrive in time.
    #[display("Gateway Timeout")]
    GatewayTimeout = 504,
    /// 505: HTTP version not supported.
    #[display("HTTP Version Not Supported")]
    HttpVersionNotSupported = 505,
    /// 506: transparent content negotiation loop.
    #[display("Variant Also Negotiates")]
    VariantAlsoNegotiates = 506,
    /// 507: insufficient storage to complete the request (WebDAV).
    #[display("Insufficient Storage")]
    InsufficientStorage = 507,
    /// 508: infinite loop detected while processing (WebDAV).
    #[display("Loop Detected")]
    LoopDetected = 508,
    /// 510: further extensions required.
    #[display("Not Extended")]
    NotExtended = 510,
    /// 511: network access authentication required.
    #[display("Network Authentication Required")]
    NetworkAuthenticationRequired = 511,
}

impl ServerError {
    /// Numeric bounds of the server error class.
    pub const RANGE: Range<u16> = 500..600;

    /// Look up the named value for `code`, if the class enumerates it.
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            500 => Some(Self::InternalServerError),
            501 => Some(Self::NotImplemented),
            502 => Some(Self::BadGateway),
            503 => Some(Self::ServiceUnavailable),
            504 => Some(Self::GatewayTimeout),
            505 => Some(Self::HttpVersionNotSupported),
            506 => Some(Self::VariantAlsoNegotiates),
            507 => Some(Self::InsufficientStorage),
            508 => Some(Self::LoopDetected),
            510 => Some(Self::NotExtended),
            511 => Some(Self::NetworkAuthenticationRequired),
            _ => None,
        }
    }

    /// The numeric status code.
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }
}

/// Error value carried by a client- or server-error classified status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error, From)]
pub enum StatusError {
    /// A 4xx status.
    #[display("client error: {_0}")]
    Client(ClientError),
    /// A 5xx status.
    #[display("server error: {_0}")]
    Server(ServerError),
}

impl StatusError {
    /// The numeric status code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Client(error) => error.code(),
            Self::Server(error) => error.code(),
        }
    }
}

/// Semantic classification of an HTTP response status code.
///
/// Built with [`ResponseStatus::from_code`], which never fails: any code
/// outside the five enumerated classes — including codes inside a
/// class's numeric bounds that are not named values — falls back to
/// [`ResponseStatus::Undefined`].
#[derive(Debug, Clone, Copy)]
pub enum ResponseStatus {
    /// Unknown or unhandled status code.
    Undefined(u16),
    /// Informational responses (100–199).
    Informational(Informational),
    /// Successful responses (200–299).
    Successful(Successful),
    /// Redirection messages (300–399).
    Redirection(Redirection),
    /// Client error responses (400–499).
    ClientError(ClientError),
    /// Server error responses (500–599).
    ServerError(ServerError),
}

impl ResponseStatus {
    /// Classify a raw status code.
    ///
    /// Range membership is tested in ascending order; the ranges are
    /// disjoint, so a code that falls inside a range but matches none of
    /// its named values is undefined rather than any later class.
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        if Informational::RANGE.contains(&code) {
            Informational::from_code(code).map_or(Self::Undefined(code), Self::Informational)
        } else if Successful::RANGE.contains(&code) {
            Successful::from_code(code).map_or(Self::Undefined(code), Self::Successful)
        } else if Redirection::RANGE.contains(&code) {
            Redirection::from_code(code).map_or(Self::Undefined(code), Self::Redirection)
        } else if ClientError::RANGE.contains(&code) {
            ClientError::from_code(code).map_or(Self::Undefined(code), Self::ClientError)
        } else if ServerError::RANGE.contains(&code) {
            ServerError::from_code(code).map_or(Self::Undefined(code), Self::ServerError)
        } else {
            Self::Undefined(code)
        }
    }

    /// The resolved numeric status code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Undefined(code) => *code,
            Self::Informational(status) => status.code(),
            Self::Successful(status) => status.code(),
            Self::Redirection(status) => status.code(),
            Self::ClientError(status) => status.code(),
            Self::ServerError(status) => status.code(),
        }
    }

    /// The associated error value, for client- and server-error
    /// classified statuses only.
    #[must_use]
    pub const fn error(&self) -> Option<StatusError> {
        match self {
            Self::ClientError(error) => Some(StatusError::Client(*error)),
            Self::ServerError(error) => Some(StatusError::Server(*error)),
            _ => None,
        }
    }

    /// Status is a named informational response.
    #[must_use]
    pub const fn is_informational(&self) -> bool {
        matches!(self, Self::Informational(_))
    }

    /// Status is a named successful response.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Successful(_))
    }

    /// Status is a named redirection message.
    #[must_use]
    pub const fn is_redirection(&self) -> bool {
        matches!(self, Self::Redirection(_))
    }

    /// Status is a named client error.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::ClientError(_))
    }

    /// Status is a named server error.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::ServerError(_))
    }

    /// Status fell through classification.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined(_))
    }
}

impl From<u16> for ResponseStatus {
    fn from(code: u16) -> Self {
        Self::from_code(code)
    }
}

impl From<http::StatusCode> for ResponseStatus {
    fn from(status: http::StatusCode) -> Self {
        Self::from_code(status.as_u16())
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined(code) => write!(f, "{code}"),
            Self::Informational(status) => write!(f, "{} {status}", status.code()),
            Self::Successful(status) => write!(f, "{} {status}", status.code()),
            Self::Redirection(status) => write!(f, "{} {status}", status.code()),
            Self::ClientError(status) => write!(f, "{} {status}", status.code()),
            Self::ServerError(status) => write!(f, "{} {status}", status.code()),
        }
    }
}

// Equality is "compare resolved codes", not "compare variant tags": an
// `Undefined(200)` built by hand equals a classified 200.
impl PartialEq for ResponseStatus {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for ResponseStatus {}

impl Hash for ResponseStatus {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl PartialEq<u16> for ResponseStatus {
    fn eq(&self, other: &u16) -> bool {
        self.code() == *other
    }
}

impl PartialEq<ResponseStatus> for u16 {
    fn eq(&self, other: &ResponseStatus) -> bool {
        *self == other.code()
    }
}

macro_rules! impl_category_eq {
    ($($category:ident),* $(,)?) => {
        $(
            impl PartialEq<$category> for ResponseStatus {
                fn eq(&self, other: &$category) -> bool {
                    self.code() == other.code()
                }
            }

            impl PartialEq<ResponseStatus> for $category {
                fn eq(&self, other: &ResponseStatus) -> bool {
                    self.code() == other.code()
                }
            }
        )*
    };
}

impl_category_eq!(Informational, Successful, Redirection, ClientError, ServerError);
