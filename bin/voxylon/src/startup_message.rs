const VOXYLON_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn startup_message() -> String {
    format!(
        "
 ██╗   ██╗ ██████╗ ██╗  ██╗██╗   ██╗██╗      ██████╗ ███╗   ██╗
 ██║   ██║██╔═══██╗╚██╗██╔╝╚██╗ ██╔╝██║     ██╔═══██╗████╗  ██║
 ██║   ██║██║   ██║ ╚███╔╝  ╚████╔╝ ██║     ██║   ██║██╔██╗ ██║
 ╚██╗ ██╔╝██║   ██║ ██╔██╗   ╚██╔╝  ██║     ██║   ██║██║╚██╗██║
  ╚████╔╝ ╚██████╔╝██╔╝ ██╗   ██║   ███████╗╚██████╔╝██║ ╚████║
   ╚═══╝   ╚═════╝ ╚═╝  ╚═╝   ╚═╝   ╚══════╝ ╚═════╝ ╚═╝  ╚═══╝

 Version : {VOXYLON_VERSION}
"
    )
}
