use ferrous_mdns_application::ports::InterfaceProvider;
use ferrous_mdns_application::use_cases::ResolveBindingUseCase;
use ferrous_mdns_domain::{Config, Resolution};
use tracing::{info, warn};

/// Log the answer every registered host would give on every discovered
/// interface, plus the interface-less view. These are exactly the decisions
/// the responder makes per inbound query.
pub fn log_answer_plan(
    config: &Config,
    provider: &dyn InterfaceProvider,
    resolver: &ResolveBindingUseCase,
) -> anyhow::Result<()> {
    let interfaces = provider.interfaces()?;
    info!(interfaces = interfaces.len(), "answer plan");

    for host in &config.hosts {
        for interface in &interfaces {
            match resolver.execute(&host.name, Some(&interface.id)) {
                Resolution::Answer(answer) if answer.is_empty() => {
                    warn!(host = %host.name, interface = %interface.id, "no address to answer with");
                }
                Resolution::Answer(answer) => {
                    info!(
                        host = %host.name,
                        interface = %interface.id,
                        a = ?answer.ipv4,
                        aaaa = ?answer.ipv6,
                        "will answer"
                    );
                }
                Resolution::OutOfScope => {
                    info!(host = %host.name, interface = %interface.id, "interface out of scope");
                }
                Resolution::UnknownHost => {}
            }
        }

        if let Resolution::Answer(answer) = resolver.execute(&host.name, None) {
            if !answer.is_empty() {
                info!(
                    host = %host.name,
                    a = ?answer.ipv4,
                    aaaa = ?answer.ipv6,
                    "will answer queries without interface context"
                );
            }
        }
    }

    Ok(())
}
