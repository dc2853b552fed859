use packtrace_infrastructure::capture;

pub fn run() -> anyhow::Result<()> {
    for device in capture::list_devices()? {
        let addresses: Vec<String> = device
            .addresses
            .iter()
            .map(|a| a.addr.to_string())
            .collect();
        println!("{:<16} {}", device.name, addresses.join(", "));
    }
    Ok(())
}
