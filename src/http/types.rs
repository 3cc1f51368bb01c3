//! HTTP settings types

use crate::parse::RegexActionEntry;
use crate::resolve::enum_with_value;

enum_with_value! {
    /// Policy used to compute the delay between retries
    pub enum RetryPolicy {
        Exponential => "exponential",
        /// Fixed delay of `linearRetryInterval` seconds
        Linear => "linear",
    }
}

enum_with_value! {
    /// What happens to a page or record that failed
    pub enum ErrorHandling {
        /// Treat the response as a success
        Success => "success",
        /// Fail the pipeline
        Stop => "stopOnError",
        /// Drop the page or record
        Skip => "skipOnError",
        /// Forward to the error output
        Send => "sendToError",
    }
}

enum_with_value! {
    /// Action for a status code, optionally after retrying
    pub enum RetryableErrorHandling {
        Success => "SUCCESS",
        Fail => "FAIL",
        Skip => "SKIP",
        Send => "SEND",
        RetryAndSuccess => "RETRY_AND_SUCCESS",
        RetryAndFail => "RETRY_AND_FAIL",
        RetryAndSkip => "RETRY_AND_SKIP",
        RetryAndSend => "RETRY_AND_SEND",
    }
}

impl RetryableErrorHandling {
    /// Whether the request is retried before the final action applies
    pub fn is_retry(self) -> bool {
        matches!(
            self,
            Self::RetryAndSuccess | Self::RetryAndFail | Self::RetryAndSkip | Self::RetryAndSend
        )
    }

    /// Action applied once retries are exhausted (or immediately)
    pub fn after_retry(self) -> ErrorHandling {
        match self {
            Self::Success | Self::RetryAndSuccess => ErrorHandling::Success,
            Self::Fail | Self::RetryAndFail => ErrorHandling::Stop,
            Self::Skip | Self::RetryAndSkip => ErrorHandling::Skip,
            Self::Send | Self::RetryAndSend => ErrorHandling::Send,
        }
    }

    /// Whether the final action ends the page fetch without failing
    ///
    /// Skipping or forwarding a page only works when pagination can move
    /// past the failed page.
    pub fn needs_page_skipping(self) -> bool {
        matches!(self.after_retry(), ErrorHandling::Skip | ErrorHandling::Send)
    }
}

enum_with_value! {
    /// Key store and trust store formats
    pub enum KeyStoreType {
        Jks => "JKS",
        Jceks => "JCEKS",
        Pkcs12 => "PKCS12",
    }
}

/// One row of the status-code error-handling table
pub type HttpErrorHandlerEntry = RegexActionEntry<RetryableErrorHandling>;
