//! Exit handling: put the terminal back when a signal ends the process.

/// Restore canonical mode and echo using termios directly.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: restore the terminal, then leave without unwinding.
extern "C" fn signal_handler(_: libc::c_int) {
    reset_terminal_termios();
    unsafe {
        if libc::isatty(1) == 1 {
            let seq = b"\x1b[0m\x1b[?25h\r\n";
            libc::write(1, seq.as_ptr() as *const libc::c_void, seq.len());
        }
        libc::_exit(130)
    }
}

pub fn install_handlers() {
    for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
        unsafe {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    {
        unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
    }
}
