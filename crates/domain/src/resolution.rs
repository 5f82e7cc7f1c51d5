use std::net::{Ipv4Addr, Ipv6Addr};

/// Addresses to answer with for one (host, interface) resolution.
///
/// Either family may be absent; an AAAA-only answer on an IPv6-only
/// interface is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BindingAnswer {
    pub ipv4: Option<Ipv4Addr>,
    pub ipv6: Option<Ipv6Addr>,
}

impl BindingAnswer {
    pub fn new(ipv4: Option<Ipv4Addr>, ipv6: Option<Ipv6Addr>) -> Self {
        Self { ipv4, ipv6 }
    }

    /// No address for either family; the caller sends nothing.
    pub fn is_empty(&self) -> bool {
        self.ipv4.is_none() && self.ipv6.is_none()
    }
}

/// Outcome of one binding resolution.
///
/// mDNS queries routinely ask about names or interfaces this instance has
/// nothing to say about, so every variant here is an ordinary value the
/// caller can skip over, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// This instance answers for the host on this interface.
    Answer(BindingAnswer),

    /// No registered host with the queried name.
    UnknownHost,

    /// The interface is excluded by the configured scope.
    OutOfScope,
}

impl Resolution {
    pub fn as_answer(&self) -> Option<&BindingAnswer> {
        match self {
            Resolution::Answer(answer) => Some(answer),
            _ => None,
        }
    }
}
