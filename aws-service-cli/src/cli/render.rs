/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use serde::Serialize;

use crate::error::{Error, ErrorKind};
use crate::paginate::ItemStream;

/// Print a single operation output as pretty JSON on stdout.
pub(crate) fn unary<T: Serialize>(output: &T) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(output)
        .map_err(|err| Error::new(ErrorKind::RuntimeError, err))?;
    println!("{json}");
    Ok(())
}

/// Drain an item stream, printing one compact JSON object per line.
///
/// Items already printed stay on stdout when a later page fails; the error
/// itself goes to stderr via [`print_error`] in the caller.
pub(crate) async fn stream<T: Serialize>(mut items: ItemStream<T>) -> Result<(), Error> {
    while let Some(item) = items.next().await {
        let json = serde_json::to_string(&item?)
            .map_err(|err| Error::new(ErrorKind::RuntimeError, err))?;
        println!("{json}");
    }
    Ok(())
}

/// Print an error envelope as a single JSON object on stderr.
pub fn print_error(err: &Error) {
    let mut chain = Vec::new();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }

    let envelope = serde_json::json!({
        "error": {
            "kind": kind_name(err.kind()),
            "message": err.to_string(),
            "chain": chain,
        }
    });
    eprintln!("{envelope}");
}

fn kind_name(kind: &ErrorKind) -> &'static str {
    match kind {
        ErrorKind::InputInvalid => "InputInvalid",
        ErrorKind::NotFound => "NotFound",
        ErrorKind::Throttled => "Throttled",
        ErrorKind::EndpointUnreachable => "EndpointUnreachable",
        ErrorKind::Service => "Service",
        ErrorKind::RuntimeError => "RuntimeError",
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;
    use crate::error::{Error, ErrorKind};

    #[derive(Serialize)]
    struct Sample {
        name: &'static str,
    }

    #[test]
    fn test_unary_serializes() {
        unary(&Sample { name: "x" }).unwrap();
    }

    #[test]
    fn test_kind_names_are_stable() {
        assert_eq!(kind_name(&ErrorKind::NotFound), "NotFound");
        assert_eq!(kind_name(&ErrorKind::EndpointUnreachable), "EndpointUnreachable");
    }

    #[test]
    fn test_print_error_walks_source_chain() {
        let inner = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
        let err = Error::new(ErrorKind::EndpointUnreachable, inner);
        // smoke test; the envelope goes to stderr
        print_error(&err);
    }
}
